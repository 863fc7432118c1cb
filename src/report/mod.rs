pub mod format;
pub mod interactive;
pub mod projection;

pub use interactive::{run_interactive, InteractiveOutcome, FALLBACK_MESSAGE};
pub use projection::{print_annual_projection, project_annual, AnnualProjection, MonthlyRevenue};
