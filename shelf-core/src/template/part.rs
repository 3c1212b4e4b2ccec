use std::{fmt::Debug, sync::Arc};

use tracing::{debug, trace};

use crate::{
    Container, Error,
    template::data::{Data, TemplateContext},
};

/// A part of a template that can be rendered without further parsing.
pub trait Part: Debug + Send + Sync {
    fn render(
        &self,
        context: &TemplateContext,
        writer: &mut dyn std::fmt::Write,
    ) -> Result<(), Error>;
}

/// Literal text.
#[derive(Debug, Clone)]
pub struct TextPart {
    text: String,
}

impl TextPart {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Part for TextPart {
    fn render(
        &self,
        _context: &TemplateContext,
        writer: &mut dyn std::fmt::Write,
    ) -> Result<(), Error> {
        writer.write_str(&self.text)?;
        Ok(())
    }
}

/// Writes the value bound to a name.
#[derive(Debug, Clone)]
pub struct VariablePart {
    name: String,
}

impl VariablePart {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Part for VariablePart {
    fn render(
        &self,
        context: &TemplateContext,
        writer: &mut dyn std::fmt::Write,
    ) -> Result<(), Error> {
        let value = context
            .get(&self.name)
            .ok_or_else(|| Error::MissingData(self.name.clone()))?;
        write!(writer, "{value}")?;
        Ok(())
    }
}

/// Renders its children in order.
#[derive(Debug, Clone, Default)]
pub struct ContainerPart {
    children: Container<Arc<dyn Part>>,
}

impl ContainerPart {
    pub fn new(children: Container<Arc<dyn Part>>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &Container<Arc<dyn Part>> {
        &self.children
    }
}

impl Part for ContainerPart {
    fn render(
        &self,
        context: &TemplateContext,
        writer: &mut dyn std::fmt::Write,
    ) -> Result<(), Error> {
        for child in &self.children {
            child.render(context, writer)?;
        }
        Ok(())
    }
}

/// Renders its children once per item of a named list, binding each item to
/// `item_name` while doing so.
#[derive(Debug, Clone)]
pub struct LoopPart {
    collection_name: String,
    item_name: String,
    body: ContainerPart,
}

impl LoopPart {
    pub fn new(
        collection_name: impl Into<String>,
        item_name: impl Into<String>,
        children: Container<Arc<dyn Part>>,
    ) -> Self {
        Self {
            collection_name: collection_name.into(),
            item_name: item_name.into(),
            body: ContainerPart::new(children),
        }
    }
}

impl Part for LoopPart {
    fn render(
        &self,
        context: &TemplateContext,
        writer: &mut dyn std::fmt::Write,
    ) -> Result<(), Error> {
        let items = lookup_collection(context, &self.collection_name)?;
        trace!(collection = %self.collection_name, items = items.len(), "Rendering Loop");

        for item in items {
            let scope = context.with(self.item_name.clone(), item.clone());
            self.body.render(&scope, writer)?;
        }
        Ok(())
    }
}

/// Renders its children only if a named list is empty.
///
/// Paired with a [`LoopPart`] over the same list this gives a
/// `foreach`/`foreachelse` construct.
#[derive(Debug, Clone)]
pub struct EmptyLoopPart {
    collection_name: String,
    body: ContainerPart,
}

impl EmptyLoopPart {
    pub fn new(collection_name: impl Into<String>, children: Container<Arc<dyn Part>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            body: ContainerPart::new(children),
        }
    }
}

impl Part for EmptyLoopPart {
    fn render(
        &self,
        context: &TemplateContext,
        writer: &mut dyn std::fmt::Write,
    ) -> Result<(), Error> {
        let items = lookup_collection(context, &self.collection_name)?;
        if !items.is_empty() {
            debug!(collection = %self.collection_name, "Skipping Empty Loop");
            return Ok(());
        }

        self.body.render(context, writer)
    }
}

fn lookup_collection<'a>(
    context: &'a TemplateContext,
    name: &str,
) -> Result<&'a Container<Data>, Error> {
    context
        .get(name)
        .ok_or_else(|| Error::MissingData(name.to_string()))?
        .as_list()
        .ok_or_else(|| Error::NotACollection(name.to_string()))
}
