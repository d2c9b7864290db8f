use crate::infra::{load_score_table, InMemoryAssessmentHistory};
use clap::Args;
use credit_fuzzy::config::ScoringConfig;
use credit_fuzzy::error::AppError;
use credit_fuzzy::workflows::eligibility::{
    AssessmentRecord, CurveView, DegreeTriple, EligibilityEngine, EligibilityService,
    NamedAssessmentRequest, ScoreAssessmentRequest, StaticScoreTable,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Customer name to resolve against the score table
    #[arg(long, required_unless_present = "score")]
    pub(crate) name: Option<String>,
    /// Use this credit score directly instead of a name lookup
    #[arg(long, conflicts_with = "name")]
    pub(crate) score: Option<f64>,
    /// Total monthly debt payments
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) debt: f64,
    /// Monthly income
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) income: f64,
    /// `name,score` CSV to resolve names against (defaults to APP_SCORE_TABLE or the sample table)
    #[arg(long)]
    pub(crate) score_table: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CurvesArgs {
    /// Number of sample points per variable
    #[arg(long, default_value_t = 11)]
    pub(crate) steps: usize,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Monthly income used for every scenario
    #[arg(long)]
    pub(crate) income: Option<f64>,
}

const DEMO_INCOME: f64 = 5000.0;
const DEMO_DEBTS: [f64; 3] = [1000.0, 2000.0, 4000.0];

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        name,
        score,
        debt,
        income,
        score_table,
    } = args;

    let scoring = ScoringConfig::load();
    let table = load_score_table(score_table, &scoring)?;
    let service = build_service(table)?;

    let record = match score {
        Some(credit_score) => service.assess_score(ScoreAssessmentRequest {
            credit_score,
            debt,
            income,
        })?,
        None => service.assess_by_name(NamedAssessmentRequest {
            name: name.unwrap_or_default(),
            debt,
            income,
        })?,
    };

    render_assessment(&record);
    Ok(())
}

pub(crate) fn run_curves(args: CurvesArgs) -> Result<(), AppError> {
    let engine = EligibilityEngine::standard()?;

    for variable in [engine.credit_score_variable(), engine.debt_ratio_variable()] {
        let view = CurveView::from_variable(variable, args.steps);
        println!("\nMembership curves: {}", view.variable);
        println!("{:>10} | {:>6} | {:>6} | {:>6}", "value", "low", "medium", "high");
        for point in &view.points {
            println!(
                "{:>10.2} | {:>6.2} | {:>6.2} | {:>6.2}",
                point.value, point.low, point.medium, point.high
            );
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let income = args.income.unwrap_or(DEMO_INCOME);
    let table = StaticScoreTable::sample();
    let names: Vec<String> = table.names().into_iter().map(str::to_string).collect();
    let history = Arc::new(InMemoryAssessmentHistory::default());
    let service = EligibilityService::new(
        Arc::new(table),
        history.clone(),
        EligibilityEngine::standard()?,
    );

    println!("Credit eligibility demo (monthly income {income:.2})");
    for debt in DEMO_DEBTS {
        println!("\nMonthly debt {debt:.2}");
        for name in &names {
            let request = NamedAssessmentRequest {
                name: name.clone(),
                debt,
                income,
            };
            match service.assess_by_name(request) {
                Ok(record) => {
                    let result = &record.assessment.result;
                    println!(
                        "- {}: score {} | ratio {:.2}% | {} ({}) | quick screen: {}",
                        name,
                        record.credit_score,
                        record.assessment.debt_ratio,
                        record.display_score(),
                        result.description,
                        record.assessment.screening.label()
                    );
                }
                Err(err) => println!("- {}: assessment unavailable: {}", name, err),
            }
        }
    }

    println!("\nAssessments recorded: {}", history.len());
    Ok(())
}

fn build_service(
    table: StaticScoreTable,
) -> Result<EligibilityService<StaticScoreTable, InMemoryAssessmentHistory>, AppError> {
    Ok(EligibilityService::new(
        Arc::new(table),
        Arc::new(InMemoryAssessmentHistory::default()),
        EligibilityEngine::standard()?,
    ))
}

pub(crate) fn render_assessment(record: &AssessmentRecord) {
    let assessment = &record.assessment;
    println!("Credit eligibility assessment");
    if let Some(name) = &record.applicant {
        println!("- Applicant: {}", name);
    }
    println!("- Credit score: {}", record.credit_score);
    println!("- Debt ratio: {:.2}%", assessment.debt_ratio);
    println!(
        "- Credit score degrees: {}",
        format_degrees(&assessment.credit_degrees)
    );
    println!(
        "- Debt ratio degrees: {}",
        format_degrees(&assessment.debt_ratio_degrees)
    );

    println!("\nRule firings");
    for (index, firing) in assessment.firings.iter().enumerate() {
        println!(
            "- rule {}: strength {:.2} -> {}",
            index + 1,
            firing.strength,
            firing.consequent
        );
    }

    println!(
        "\nEligibility: {} ({} - {})",
        record.display_score(),
        assessment.result.category.label(),
        assessment.result.description
    );
    println!("Quick screen: {}", assessment.screening.label());
}

fn format_degrees(degrees: &DegreeTriple) -> String {
    format!(
        "low {:.2} | medium {:.2} | high {:.2}",
        degrees.low, degrees.medium, degrees.high
    )
}
