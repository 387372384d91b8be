mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod dashboard;
pub use dashboard::DashboardView;

mod project_detail;
pub use project_detail::ProjectDetailView;

mod members;
pub use members::MembersPanel;

mod login;
pub use login::LoginForm;

mod register;
pub use register::RegisterForm;
