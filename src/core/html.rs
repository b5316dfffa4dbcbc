// src/core/html.rs

// Thin query layer over `scraper`. Lookups return Option/Vec; "not found" is
// never an error. Only a selector that fails to compile is.

use scraper::{ElementRef, Html, Selector};

use crate::error::MarkupError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum By {
    /// Element carries this class (among possibly others).
    Class(&'static str),
    /// Element id equals this value.
    Id(&'static str),
    /// Tag name alone.
    Tag,
}

/// `tag` + one attribute condition, e.g. `<td class="result_text">`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locator {
    pub tag: &'static str,
    pub by: By,
}

impl Locator {
    pub const fn class(tag: &'static str, class: &'static str) -> Self {
        Self { tag, by: By::Class(class) }
    }
    pub const fn id(tag: &'static str, id: &'static str) -> Self {
        Self { tag, by: By::Id(id) }
    }
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, by: By::Tag }
    }

    /// CSS form of this locator. Attribute values are quoted, so class names
    /// with odd characters still compile.
    pub fn css(&self) -> String {
        match self.by {
            By::Class(c) => format!(r#"{}[class~="{}"]"#, self.tag, escape_attr(c)),
            By::Id(i) => format!(r#"{}[id="{}"]"#, self.tag, escape_attr(i)),
            By::Tag => self.tag.to_string(),
        }
    }

    fn selector(&self) -> Result<Selector, MarkupError> {
        let css = self.css();
        Selector::parse(&css).map_err(|e| MarkupError::Selector {
            selector: css.clone(),
            reason: e.to_string(),
        })
    }
}

fn escape_attr(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"")
}

/// A parsed page.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self { html: Html::parse_document(body) }
    }

    pub fn find_first(&self, loc: &Locator) -> Result<Option<Element<'_>>, MarkupError> {
        let sel = loc.selector()?;
        Ok(self.html.select(&sel).next().map(Element))
    }

    pub fn find_all(&self, loc: &Locator) -> Result<Vec<Element<'_>>, MarkupError> {
        let sel = loc.selector()?;
        Ok(self.html.select(&sel).map(Element).collect())
    }
}

/// One element inside a `Document`. Queries only look at descendants.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    pub fn find_first(&self, loc: &Locator) -> Result<Option<Element<'a>>, MarkupError> {
        let sel = loc.selector()?;
        Ok(self.0.select(&sel).next().map(Element))
    }

    pub fn find_all(&self, loc: &Locator) -> Result<Vec<Element<'a>>, MarkupError> {
        let sel = loc.selector()?;
        Ok(self.0.select(&sel).map(Element).collect())
    }

    /// All descendant text, surrounding whitespace trimmed.
    pub fn text(&self) -> String {
        self.0.text().collect::<String>().trim().to_string()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }
}

/// Text of the first `loc` under `el`, or empty when there is none.
pub fn text_or_empty(el: &Element<'_>, loc: &Locator) -> Result<String, MarkupError> {
    Ok(el.find_first(loc)?.map(|e| e.text()).unwrap_or_default())
}
