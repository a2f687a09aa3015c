/// Site root
use crate::{middleware::Flash, view::View};

pub const INDEX_VIEW: &str = "index";

/// GET / - landing page; shows the message left by the last redirect
pub async fn index(flash: Flash) -> View {
    View::new(INDEX_VIEW).with_flash(&flash)
}
