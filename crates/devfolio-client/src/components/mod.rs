//! UI components for the devfolio client.

mod floating_elements;
mod globe;
pub mod layout;
mod modal;
mod particle_network;
mod project_upload_form;
pub mod sections;
mod toast;

pub use floating_elements::FloatingElements;
pub use globe::Globe;
pub use modal::Modal;
pub use particle_network::ParticleNetwork;
pub use project_upload_form::ProjectUploadForm;
pub use toast::{Toast, ToastProvider, use_toast};
