//! Server-side model and renderer of the prompt console page.

use crate::locales::Locales;
use minijinja::{context, Environment};
use serde::Serialize;

const TEMPLATE_NAME: &str = "console.html";

/// What the console currently shows.
///
/// Output and error are mutually exclusive; the constructors are the only
/// way to set either of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsoleView {
    prompt: String,
    output: Option<String>,
    error: Option<String>,
}

impl ConsoleView {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), output: None, error: None }
    }

    pub fn with_output(prompt: impl Into<String>, output: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), output: Some(output.into()), error: None }
    }

    pub fn with_error(prompt: impl Into<String>, error: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), output: None, error: Some(error.into()) }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// User-visible strings of the console, resolved from the `console.*` locale keys.
#[derive(Debug, Clone, Serialize)]
pub struct ConsoleLabels {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub submit: String,
    pub busy: String,
    pub result_heading: String,
    pub empty_prompt: String,
    pub request_failed: String,
    pub unexpected_error: String,
    pub footer: String,
}

impl ConsoleLabels {
    pub fn from_locales(locales: &Locales) -> Self {
        let t = |key: &str| locales.t(&format!("console.{}", key));
        Self {
            title: t("title"),
            subtitle: t("subtitle"),
            placeholder: t("placeholder"),
            submit: t("submit"),
            busy: t("busy"),
            result_heading: t("result_heading"),
            empty_prompt: t("empty_prompt"),
            request_failed: t("request_failed"),
            unexpected_error: t("unexpected_error"),
            footer: t("footer"),
        }
    }
}

pub struct ConsolePage {
    env: Environment<'static>,
    labels: ConsoleLabels,
    lang: String,
}

impl ConsolePage {
    pub fn new(locales: &Locales) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, include_str!("../../templates/console.html"))?;
        Ok(Self {
            env,
            labels: ConsoleLabels::from_locales(locales),
            lang: locales.default_locale().to_string(),
        })
    }

    pub fn labels(&self) -> &ConsoleLabels {
        &self.labels
    }

    /// Language tag of the page, the default locale's file name.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Renders the full page; the `.html` template name turns on auto-escaping.
    pub fn render(&self, view: &ConsoleView) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        template.render(context! { lang => &self.lang, labels => &self.labels, view => view })
    }
}
