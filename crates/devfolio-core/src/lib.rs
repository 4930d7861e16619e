//! Devfolio core library
//!
//! Target-independent pieces of the portfolio site: the drifting-object
//! animations and their render loop, the contact form flow, the project
//! catalog and the static profile content.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod catalog;
pub mod chrome;
pub mod color;
pub mod config;
pub mod contact;
pub mod content;
pub mod drift;
pub mod floating;
pub mod globe;
pub mod particles;
pub mod random;
pub mod surface;

pub use animation::{Animation, LoopError, LoopPhase, RenderLoop};
pub use catalog::{CatalogError, Clock, NewProject, Project, ProjectCatalog, ProjectDraft};
pub use chrome::{RevealLatch, ScrollChrome};
pub use color::Color;
pub use config::{ConfigError, EmailConfig};
pub use contact::{
    ContactError, ContactFlow, ContactForm, EmailSender, Field, FieldError, FieldErrors,
    SubmitPhase, TemplateParams,
};
pub use floating::FloatingShapes;
pub use globe::Globe;
pub use particles::ParticleNetwork;
pub use random::RandomSource;
pub use surface::{Font, Surface, TextAlign, Viewport};
