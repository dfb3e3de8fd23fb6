mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod user_admin;
pub use user_admin::UserAdminView;
