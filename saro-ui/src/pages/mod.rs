//! Pages
//!
//! One component per dashboard page. Each creates its page model signal on
//! mount and drops it on unmount.

pub mod agentic;
pub mod audit;
pub mod audit_flow;
pub mod autonomous;
pub mod enterprise;
pub mod feed_log;
pub mod forms;
pub mod ingestion;
pub mod model_checker;
pub mod onboarding;
pub mod output_form;
pub mod overview;
pub mod policy_library;
pub mod reports;

pub use agentic::Agentic;
pub use audit::Audit;
pub use audit_flow::AuditFlow;
pub use autonomous::Autonomous;
pub use enterprise::Enterprise;
pub use feed_log::FeedLog;
pub use ingestion::Ingestion;
pub use model_checker::ModelChecker;
pub use onboarding::Onboarding;
pub use overview::Overview;
pub use policy_library::PolicyLibrary;
pub use reports::Reports;
