use crate::core::form::RegistrationForm;
use crate::domain::model::{EventDetails, FieldConfig, FieldValue, FieldVariant, NormalizerKind};
use crate::domain::ports::FieldRenderer;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

/// Plain HTML controls, one `<div class="field">` per field.
#[derive(Debug, Clone, Default)]
pub struct HtmlFieldRenderer;

impl HtmlFieldRenderer {
    fn common_attrs(field: &FieldConfig) -> String {
        let mut attrs = format!(
            r#"id="{}" name="{}""#,
            attr(&field.id),
            attr(&field.entry)
        );
        if field.required {
            attrs.push_str(" required");
        }
        attrs
    }

    fn input(field: &FieldConfig, input_type: &str, value: &str) -> String {
        let mut attrs = Self::common_attrs(field);
        if let Some(placeholder) = &field.placeholder {
            let _ = write!(attrs, r#" placeholder="{}""#, attr(placeholder));
        }
        if let Some(pattern) = &field.pattern {
            let _ = write!(attrs, r#" pattern="{}""#, attr(pattern));
        }
        if let Some(min) = field.min {
            let _ = write!(attrs, r#" min="{}""#, min);
        }
        if field.numeric {
            attrs.push_str(r#" inputmode="numeric""#);
        }
        if let Some(kind) = field.normalizer {
            let mask = match kind {
                NormalizerKind::Phone => "phone",
                NormalizerKind::PostalCode => "postal-code",
            };
            let _ = write!(attrs, r#" data-mask="{}""#, mask);
        }
        format!(
            r#"<input type="{}" {} value="{}">"#,
            input_type,
            attrs,
            attr(value)
        )
    }

    fn select(field: &FieldConfig, value: &FieldValue) -> String {
        let mut html = format!("<select {}>", Self::common_attrs(field));
        html.push_str(r#"<option value="">Select...</option>"#);
        for option in &field.options {
            let selected = if value.contains(&option.value) { " selected" } else { "" };
            let _ = write!(
                html,
                r#"<option value="{}"{}>{}</option>"#,
                attr(&option.value),
                selected,
                text(&option.label)
            );
        }
        html.push_str("</select>");
        html
    }

    fn choice_group(field: &FieldConfig, input_type: &str, value: &FieldValue) -> String {
        let mut html = String::from("<div class=\"options\">");
        for (index, option) in field.options.iter().enumerate() {
            let checked = if value.contains(&option.value) { " checked" } else { "" };
            let required = if field.required && input_type == "radio" {
                " required"
            } else {
                ""
            };
            let _ = write!(
                html,
                r#"<label><input type="{}" id="{}-{}" name="{}" value="{}"{}{}> {}</label>"#,
                input_type,
                attr(&field.id),
                index,
                attr(&field.entry),
                attr(&option.value),
                checked,
                required,
                text(&option.label)
            );
        }
        html.push_str("</div>");
        html
    }
}

impl FieldRenderer for HtmlFieldRenderer {
    fn render_field(&self, field: &FieldConfig, value: Option<&FieldValue>) -> String {
        let empty = FieldValue::default();
        let value = value.unwrap_or(&empty);
        let marker = if field.required { " *" } else { "" };

        let control = match field.variant {
            FieldVariant::Text => Self::input(field, "text", value.as_text()),
            FieldVariant::Number => Self::input(field, "number", value.as_text()),
            FieldVariant::Date => Self::input(field, "date", value.as_text()),
            FieldVariant::Select => Self::select(field, value),
            FieldVariant::Radio => Self::choice_group(field, "radio", value),
            FieldVariant::Checkbox => Self::choice_group(field, "checkbox", value),
            FieldVariant::Textarea => format!(
                r#"<textarea {} rows="{}">{}</textarea>"#,
                Self::common_attrs(field),
                field.rows.unwrap_or(4),
                text(value.as_text())
            ),
        };

        format!(
            r#"<div class="field"><label for="{}">{}{}</label>{}</div>"#,
            attr(&field.id),
            text(&field.label),
            marker,
            control
        )
    }
}

/// Whole page: event header, fields grouped by section, the error slot and
/// the submit button, disabled while the slot holds a message.
pub fn render_page(
    form: &RegistrationForm,
    event: &EventDetails,
    endpoint: &str,
    renderer: &dyn FieldRenderer,
) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    let _ = write!(html, "<title>{}</title></head><body>", text(&event.title));

    let _ = write!(html, "<header><h1>{}</h1>", text(&event.title));
    if let Some(motto) = &event.motto {
        let _ = write!(html, "<p class=\"motto\">{}</p>", text(motto));
    }
    if let Some(reference) = &event.motto_reference {
        let _ = write!(html, "<p class=\"reference\">{}</p>", text(reference));
    }
    if !event.details.is_empty() {
        html.push_str("<dl>");
        for detail in &event.details {
            let _ = write!(
                html,
                "<dt>{}</dt><dd>{}</dd>",
                text(&detail.label),
                text(&detail.value)
            );
        }
        html.push_str("</dl>");
    }
    html.push_str("</header>\n");

    let _ = write!(
        html,
        r#"<form action="{}" method="POST" target="_blank">"#,
        attr(endpoint)
    );

    let mut current_section: Option<&str> = None;
    for (field, rendered) in form.fields().iter().zip(form.render_fields(renderer)) {
        if let Some(name) = field.section.as_deref() {
            if current_section != Some(name) {
                let _ = write!(html, "\n<h3>{}</h3>", text(name));
                current_section = Some(name);
            }
        }
        html.push('\n');
        html.push_str(&rendered);
    }

    if let Some(error) = form.error() {
        let _ = write!(
            html,
            "\n<div class=\"form-error\" role=\"alert\">{}</div>",
            text(&error.to_string())
        );
    }
    let disabled = if form.submit_enabled() { "" } else { " disabled" };
    let _ = write!(html, "\n<button type=\"submit\"{}>Submit</button>", disabled);
    html.push_str("\n</form></body></html>\n");
    html
}
