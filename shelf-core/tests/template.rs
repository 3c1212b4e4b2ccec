use std::sync::Arc;

use shelf::{
    Container, Error,
    template::{
        ContainerPart, Data, EmptyLoopPart, LoopPart, Part, Template, TemplateContext, TextPart,
        VariablePart,
    },
};

fn parts(parts: Vec<Arc<dyn Part>>) -> Container<Arc<dyn Part>> {
    Container::from(parts)
}

fn foreach_template() -> Template {
    Template::new(parts(vec![
        Arc::new(TextPart::new("items:")),
        Arc::new(LoopPart::new(
            "items",
            "item",
            parts(vec![
                Arc::new(TextPart::new(" ")),
                Arc::new(VariablePart::new("item")),
            ]),
        )),
        Arc::new(EmptyLoopPart::new(
            "items",
            parts(vec![Arc::new(TextPart::new(" none"))]),
        )),
    ]))
}

#[test]
fn renders_loop_when_collection_has_items() {
    let mut context = TemplateContext::new();
    context.set("items", vec!["a", "b", "c"]);

    assert_eq!(
        foreach_template().render_to_string(&context).unwrap(),
        "items: a b c"
    );
}

#[test]
fn renders_empty_loop_when_collection_is_empty() {
    let mut context = TemplateContext::new();
    context.set("items", Container::<Data>::new());

    assert_eq!(
        foreach_template().render_to_string(&context).unwrap(),
        "items: none"
    );
}

#[test]
fn empty_loop_part_skips_children_for_non_empty_collection() {
    let part = EmptyLoopPart::new("list", parts(vec![Arc::new(TextPart::new("empty"))]));
    let mut context = TemplateContext::new();
    context.set("list", vec![1i64]);

    let mut output = String::new();
    part.render(&context, &mut output).unwrap();
    assert_eq!(output, "");
}

#[test]
fn empty_loop_part_missing_collection() {
    let part = EmptyLoopPart::new("list", Container::new());
    let mut output = String::new();

    assert_eq!(
        part.render(&TemplateContext::new(), &mut output),
        Err(Error::MissingData("list".to_string()))
    );
}

#[test]
fn empty_loop_part_rejects_scalar() {
    let part = EmptyLoopPart::new("list", Container::new());
    let mut context = TemplateContext::new();
    context.set("list", "not a list");

    let mut output = String::new();
    assert_eq!(
        part.render(&context, &mut output),
        Err(Error::NotACollection("list".to_string()))
    );
}

#[test]
fn variable_part_missing_data() {
    let template: Template = [Arc::new(VariablePart::new("who")) as Arc<dyn Part>]
        .into_iter()
        .collect();

    assert_eq!(
        template.render_to_string(&TemplateContext::new()),
        Err(Error::MissingData("who".to_string()))
    );
}

#[test]
fn variable_part_renders_scalars_and_lists() {
    let template = Template::new(parts(vec![
        Arc::new(VariablePart::new("flag")),
        Arc::new(TextPart::new(" ")),
        Arc::new(VariablePart::new("count")),
        Arc::new(TextPart::new(" ")),
        Arc::new(VariablePart::new("list")),
    ]));

    let mut context = TemplateContext::new();
    context.set("flag", true);
    context.set("count", 3i64);
    context.set("list", vec![1i64, 2]);

    assert_eq!(template.render_to_string(&context).unwrap(), "true 3 [1, 2]");
}

#[test]
fn loop_binding_does_not_leak() {
    let template = Template::new(parts(vec![
        Arc::new(LoopPart::new(
            "names",
            "name",
            parts(vec![Arc::new(VariablePart::new("name"))]),
        )),
        Arc::new(VariablePart::new("name")),
    ]));

    let mut context = TemplateContext::new();
    context.set("names", vec!["x", "y"]);
    context.set("name", "outer");

    assert_eq!(template.render_to_string(&context).unwrap(), "xyouter");
}

#[test]
fn container_part_renders_children_in_order() {
    let part = ContainerPart::new(parts(vec![
        Arc::new(TextPart::new("1")),
        Arc::new(TextPart::new("2")),
        Arc::new(TextPart::new("3")),
    ]));

    let mut output = String::new();
    part.render(&TemplateContext::new(), &mut output).unwrap();

    assert_eq!(output, "123");
    assert_eq!(part.children().len(), 3);
}

#[test]
fn empty_template_renders_nothing() {
    assert_eq!(
        Template::default()
            .render_to_string(&TemplateContext::new())
            .unwrap(),
        ""
    );
}
