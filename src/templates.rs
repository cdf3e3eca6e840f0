/// HTML page rendering
///
/// All templates are compiled into the binary and registered with Tera once at
/// startup. Autoescaping is on for every `.html` template, so project fields
/// are always rendered as text.

use crate::project::Project;
use tera::{Context, Tera};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("resume.html", include_str!("../templates/resume.html")),
    ("projects.html", include_str!("../templates/projects.html")),
    ("form.html", include_str!("../templates/form.html")),
    ("contact.html", include_str!("../templates/contact.html")),
    ("thankyou.html", include_str!("../templates/thankyou.html")),
    ("404.html", include_str!("../templates/404.html")),
];

/// Pages that take no data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Resume,
    ProjectForm,
    Contact,
    ThankYou,
    NotFound,
}

impl Page {
    fn template(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::About => "about.html",
            Page::Resume => "resume.html",
            Page::ProjectForm => "form.html",
            Page::Contact => "contact.html",
            Page::ThankYou => "thankyou.html",
            Page::NotFound => "404.html",
        }
    }
}

/// Compiled template set shared by all handlers
#[derive(Debug)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Parse and register the embedded templates
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    /// Render a page without dynamic data
    pub fn render_page(&self, page: Page) -> tera::Result<String> {
        self.tera.render(page.template(), &Context::new())
    }

    /// Render the project listing in the given order
    pub fn render_projects(&self, projects: &[Project]) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("projects", projects);
        self.tera.render("projects.html", &context)
    }
}
