use tera::{Context, Tera};

const STYLE_CSS: &str = include_str!("../../templates/style.css");
const INDEX_HTML: &str = include_str!("../../templates/index.html");
const RESULT_HTML: &str = include_str!("../../templates/result.html");

/// Error type for page rendering
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),
}

/// Renders the upload form and result pages with Tera
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Create a renderer with the built-in templates
    pub fn new() -> Result<Self, PageError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![("index.html", INDEX_HTML), ("result.html", RESULT_HTML)])?;

        tracing::info!(
            templates = tera.get_template_names().count(),
            "Page renderer initialized"
        );

        Ok(Self { tera })
    }

    fn base_context() -> Context {
        let mut context = Context::new();
        context.insert("css", STYLE_CSS);
        context
    }

    /// Render the upload form
    pub fn index(&self, default_intensity: u32) -> Result<String, PageError> {
        let mut context = Self::base_context();
        context.insert("default_intensity", &default_intensity);
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Render the page showing the original and enhanced image side by side
    pub fn result(&self, filename: &str, fallback: bool) -> Result<String, PageError> {
        let mut context = Self::base_context();
        context.insert("filename", filename);
        context.insert("fallback", &fallback);
        Ok(self.tera.render("result.html", &context)?)
    }
}
