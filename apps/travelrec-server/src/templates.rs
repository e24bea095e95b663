use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::error::AppError;

/// Page templates compiled into the binary.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", include_str!("../templates/layout.html"))?;
        env.add_template("index.html", include_str!("../templates/index.html"))?;
        env.add_template("recommendation.html", include_str!("../templates/recommendation.html"))?;
        env.add_template("recommendations.html", include_str!("../templates/recommendations.html"))?;
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<Html<String>, AppError> {
        let tmpl = self.env.get_template(name)?;
        Ok(Html(tmpl.render(ctx)?))
    }
}
