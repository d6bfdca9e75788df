pub mod export;
pub mod html;
pub mod json;
pub mod types;

pub use export::{export_to_path, render};
pub use html::{EMPTY_STATE, publication_list, render_page};
pub use json::{PublicationJson, ViewJson};
pub use types::{ExportFormat, RenderOptions};
