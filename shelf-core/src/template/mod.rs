mod data;
mod part;

use std::sync::Arc;

pub use data::{Data, TemplateContext};
pub use part::{ContainerPart, EmptyLoopPart, LoopPart, Part, TextPart, VariablePart};

use crate::{Container, Error};

/// A tree of already parsed parts.
#[derive(Debug, Clone, Default)]
pub struct Template {
    root: ContainerPart,
}

impl Template {
    pub fn new(parts: Container<Arc<dyn Part>>) -> Self {
        Self {
            root: ContainerPart::new(parts),
        }
    }

    pub fn render(
        &self,
        context: &TemplateContext,
        writer: &mut dyn std::fmt::Write,
    ) -> Result<(), Error> {
        self.root.render(context, writer)
    }

    pub fn render_to_string(&self, context: &TemplateContext) -> Result<String, Error> {
        let mut output = String::new();
        self.render(context, &mut output)?;
        Ok(output)
    }
}

impl FromIterator<Arc<dyn Part>> for Template {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Part>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
