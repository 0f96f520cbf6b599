/// HTML bodies for the notification emails
///
/// All values that came from a visitor go through `escape_html` before
/// they are placed in markup. Multi-line fields additionally keep their
/// line breaks as `<br>`.

use chrono::{DateTime, Utc};

use crate::forms::{ApplicationForm, ContactForm, HireInquiryForm, ResumeUpload};

const ACCENT: &str = "#ff66c4";
const HEADER_STYLE: &str = "background: linear-gradient(135deg, #ff66c4 0%, #ff4da6 100%); \
     padding: 30px; border-radius: 10px 10px 0 0; text-align: center;";
const CARD_STYLE: &str = "background: white; padding: 25px; border-radius: 8px; \
     box-shadow: 0 2px 10px rgba(0,0,0,0.1); margin-bottom: 20px;";
const SECTION_TITLE_STYLE: &str = "color: #333; margin: 0 0 20px 0; font-size: 20px; \
     border-bottom: 2px solid #ff66c4; padding-bottom: 10px;";
const LABEL_STYLE: &str = "padding: 8px 0; font-weight: bold; color: #555;";
const VALUE_STYLE: &str = "padding: 8px 0; color: #333;";
const QUOTE_STYLE: &str =
    "background: #f8f9fa; padding: 15px; border-radius: 6px; border-left: 4px solid #ff66c4;";

/// Escapes the five HTML-significant characters
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped, with newlines turned into `<br>`
pub fn multiline(value: &str) -> String {
    escape_html(value).replace("\r\n", "<br>").replace('\n', "<br>")
}

/// e.g. "Friday, October 3, 2025 at 02:15 PM UTC"
pub fn submitted_at(now: DateTime<Utc>) -> String {
    now.format("%A, %B %-d, %Y at %I:%M %p UTC").to_string()
}

fn page(title: &str, subtitle: Option<&str>, body: &str) -> String {
    let subtitle = subtitle
        .map(|s| {
            format!(r#"<p style="color: rgba(255,255,255,0.9); margin: 10px 0 0 0; font-size: 16px;">{s}</p>"#)
        })
        .unwrap_or_default();

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #ffffff;">
<div style="{HEADER_STYLE}">
<h1 style="color: white; margin: 0; font-size: 28px; font-weight: bold;">{title}</h1>
{subtitle}
</div>
<div style="background: #f8f9fa; padding: 30px; border-radius: 0 0 10px 10px;">
{body}
</div>
</div>"#
    )
}

fn card(title: &str, inner: &str) -> String {
    format!(r#"<div style="{CARD_STYLE}"><h2 style="{SECTION_TITLE_STYLE}">{title}</h2>{inner}</div>"#)
}

fn row(label: &str, value: &str) -> String {
    format!(r#"<tr><td style="{LABEL_STYLE}">{label}:</td><td style="{VALUE_STYLE}">{value}</td></tr>"#)
}

/// Row for an optional field; empty values produce nothing
fn optional_row(label: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        row(label, &escape_html(value))
    }
}

fn email_link(address: &str) -> String {
    let address = escape_html(address);
    format!(r#"<a href="mailto:{address}" style="color: {ACCENT}; text-decoration: none;">{address}</a>"#)
}

fn table(rows: &[String]) -> String {
    format!(
        r#"<table style="width: 100%; border-collapse: collapse;">{}</table>"#,
        rows.concat()
    )
}

fn quoted(text: &str) -> String {
    format!(
        r#"<div style="{QUOTE_STYLE}"><p style="margin: 0; color: #333; line-height: 1.6;">{}</p></div>"#,
        multiline(text)
    )
}

fn footer(now: DateTime<Utc>, signature: Option<&str>) -> String {
    let signature = signature
        .map(|s| {
            format!(r#"<p style="color: {ACCENT}; font-size: 14px; margin: 10px 0 0 0; font-weight: bold;">{s}</p>"#)
        })
        .unwrap_or_default();

    format!(
        r#"<div style="text-align: center; padding: 20px; border-top: 1px solid #eee; margin-top: 30px;"><p style="color: #666; font-size: 14px; margin: 0;">Submitted on {}</p>{signature}</div>"#,
        submitted_at(now)
    )
}

pub fn render_contact(form: &ContactForm, now: DateTime<Utc>) -> String {
    let details = table(&[
        row("Name", &escape_html(&form.name)),
        row("Email", &email_link(&form.email)),
    ]);

    let body = [
        card("Contact Details", &details),
        card("Message", &quoted(&form.message)),
        footer(now, None),
    ]
    .concat();

    page("New Contact Form Submission", None, &body)
}

pub fn render_application(
    form: &ApplicationForm,
    resume: Option<&ResumeUpload>,
    now: DateTime<Utc>,
) -> String {
    let mut body = card(
        "Applicant Information",
        &table(&[
            row("Name", &escape_html(&form.full_name())),
            row("Email", &email_link(&form.email)),
            row("Phone", &escape_html(&form.phone)),
            optional_row("Position", &form.position),
            optional_row("Experience", &form.experience),
            optional_row("Location", &form.location),
        ]),
    );

    let skills = form.skills();
    if !skills.is_empty() {
        let items: String = skills
            .iter()
            .map(|s| format!("<li>{}</li>", escape_html(s)))
            .collect();
        body.push_str(&card(
            "Skills",
            &format!(r#"<ul style="margin: 0; padding-left: 20px; color: #333;">{items}</ul>"#),
        ));
    }

    if !form.message.is_empty() {
        body.push_str(&card("Message", &quoted(&form.message)));
    }

    if let Some(resume) = resume {
        body.push_str(&card(
            "Resume",
            &format!(
                r#"<p style="margin: 0; color: #333;">Attached: {} ({:.2} MB)</p>"#,
                escape_html(&resume.filename),
                resume.size_mb()
            ),
        ));
    }

    body.push_str(&footer(now, None));
    page("New Job Application", Some("ShiftORL Talent Portal"), &body)
}

pub fn render_hire(form: &HireInquiryForm, now: DateTime<Utc>) -> String {
    let mut body = card(
        "Company Information",
        &table(&[
            row("Company Name", &escape_html(&form.company_name)),
            row("Contact Name", &escape_html(&form.contact_name)),
            row("Email", &email_link(&form.email)),
            row("Phone", &escape_html(&form.phone)),
            optional_row("Industry", &form.industry),
            optional_row("Company Size", &form.company_size),
        ]),
    );

    if form.has_position_details() {
        body.push_str(&card(
            "Position Details",
            &table(&[
                optional_row("Position Title", &form.position_title),
                optional_row("Position Level", &form.position_level),
                optional_row("Timeline", &form.timeline),
                optional_row("Budget Range", &form.budget),
            ]),
        ));
    }

    let items: String = form
        .delegations()
        .iter()
        .enumerate()
        .map(|(i, d)| {
            format!(
                r#"<li style="margin-bottom: 8px;"><strong>Responsibility {}:</strong> {}</li>"#,
                i + 1,
                escape_html(d)
            )
        })
        .collect();
    body.push_str(&card(
        "Delegation Opportunities",
        &format!(
            r#"<div style="{QUOTE_STYLE}"><ul style="margin: 0; padding-left: 20px; color: #333; line-height: 1.6;">{items}</ul></div>"#
        ),
    ));

    for (title, text) in [
        ("Key Requirements &amp; Skills", &form.requirements),
        ("Benefits &amp; Perks", &form.benefits),
        ("Additional Information", &form.message),
    ] {
        if !text.is_empty() {
            body.push_str(&card(title, &quoted(text)));
        }
    }

    body.push_str(&footer(now, Some("ShiftORL Recruiting Platform")));
    page("New Hiring Inquiry", Some("ShiftORL Client Portal"), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 3, 14, 15, 0).unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_multiline_keeps_breaks() {
        assert_eq!(multiline("a\nb\r\n<c>"), "a<br>b<br>&lt;c&gt;");
    }

    #[test]
    fn test_submitted_at_format() {
        assert_eq!(
            submitted_at(now()),
            "Friday, October 3, 2025 at 02:15 PM UTC"
        );
    }

    #[test]
    fn test_contact_body_escapes_visitor_input() {
        let form = ContactForm {
            name: "<b>Jane</b>".to_string(),
            email: "jane@example.com".to_string(),
            message: "line one\nline two".to_string(),
        };
        let html = render_contact(&form, now());
        assert!(html.contains("&lt;b&gt;Jane&lt;/b&gt;"));
        assert!(!html.contains("<b>Jane</b>"));
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("mailto:jane@example.com"));
    }

    #[test]
    fn test_application_body_sections() {
        let form = ApplicationForm {
            first_name: "Ana".to_string(),
            last_name: "Rivera".to_string(),
            email: "ana@example.com".to_string(),
            phone: "407-555-0100".to_string(),
            skill2: "Excel".to_string(),
            ..Default::default()
        };
        let resume = ResumeUpload {
            filename: "cv.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0; 1024 * 1024],
        };

        let html = render_application(&form, Some(&resume), now());
        assert!(html.contains("Ana Rivera"));
        assert!(html.contains("<li>Excel</li>"));
        assert!(html.contains("Attached: cv.pdf (1.00 MB)"));
        assert!(!html.contains("Position:"));
        assert!(!html.contains(">Message<"));

        let html = render_application(&form, None, now());
        assert!(!html.contains("Attached:"));
    }

    #[test]
    fn test_hire_body_sections() {
        let form = HireInquiryForm {
            company_name: "Acme".to_string(),
            contact_name: "Sam".to_string(),
            email: "sam@acme.example".to_string(),
            phone: "1".to_string(),
            delegation1: "Payroll".to_string(),
            delegation2: "Scheduling".to_string(),
            delegation3: "Vendors".to_string(),
            benefits: "Dental".to_string(),
            ..Default::default()
        };
        let html = render_hire(&form, now());
        assert!(html.contains("Responsibility 3:</strong> Vendors"));
        assert!(html.contains("Benefits &amp; Perks"));
        assert!(!html.contains("Position Details"));
        assert!(!html.contains("Key Requirements"));
        assert!(html.contains("ShiftORL Recruiting Platform"));
    }
}
