//! UI components.

pub mod bar_chart;
pub mod dashboard;
pub mod export_button;
pub mod login;
pub mod pagination;
pub mod signup;
pub mod spinner;
pub mod user_form;
pub mod user_table;
pub mod users_page;

pub use bar_chart::BarChart;
pub use dashboard::Dashboard;
pub use export_button::ExportButtons;
pub use login::LoginPage;
pub use pagination::PaginationControls;
pub use signup::SignupPage;
pub use spinner::LoadingSpinner;
pub use user_form::UserForm;
pub use user_table::UserTable;
pub use users_page::UsersPage;
