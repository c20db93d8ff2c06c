//! Notification rendering.
//!
//! Validated submissions are bound to embedded Tera templates. Every template
//! name ends in `.html`, so Tera escapes each interpolated value; only values
//! this module has already escaped, or trusted configuration, are marked safe.

use crate::config::MailSettings;
use crate::engine::format_dollars;
use crate::models::{ContactForm, ContactInfo, QuoteRequest};
use serde::Serialize;
use tera::{Context, Tera};

const CONTACT_BUSINESS: &str = "contact_business.html";
const QUOTE_BUSINESS: &str = "quote_business.html";
const QUOTE_CUSTOMER: &str = "quote_customer.html";
const QUOTE_LEAD: &str = "quote_lead.html";

/// Subject line and HTML body of one email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub html: String,
}

#[derive(Serialize)]
struct BusinessView<'a> {
    name: &'a str,
    phone: &'a str,
    phone_dial: &'a str,
    inbox: &'a str,
    site_url: &'a str,
}

#[derive(Serialize)]
struct ContactView<'a> {
    full_name: &'a str,
    email: &'a str,
    phone: &'a str,
    phone_digits: String,
    event_date: String,
}

impl<'a> From<&'a ContactInfo> for ContactView<'a> {
    fn from(contact: &'a ContactInfo) -> Self {
        Self {
            full_name: &contact.full_name,
            email: contact.email.as_str(),
            phone: contact.phone.as_str(),
            phone_digits: contact.phone.digits_only(),
            event_date: contact.event_date.long_format(),
        }
    }
}

#[derive(Serialize)]
struct PackageView {
    hours: u32,
    price: String,
}

/// Renders every notification the service sends.
pub struct NotificationRenderer {
    tera: Tera,
    mail: MailSettings,
}

impl NotificationRenderer {
    /// Compile the embedded templates.
    pub fn new(mail: MailSettings) -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                CONTACT_BUSINESS,
                include_str!("../../templates/contact_business.html"),
            ),
            (
                QUOTE_BUSINESS,
                include_str!("../../templates/quote_business.html"),
            ),
            (
                QUOTE_CUSTOMER,
                include_str!("../../templates/quote_customer.html"),
            ),
            (QUOTE_LEAD, include_str!("../../templates/quote_lead.html")),
        ])?;

        Ok(Self { tera, mail })
    }

    pub fn mail(&self) -> &MailSettings {
        &self.mail
    }

    fn base_context(&self, contact: &ContactInfo) -> Context {
        let mut context = Context::new();
        context.insert(
            "business",
            &BusinessView {
                name: &self.mail.name,
                phone: &self.mail.phone,
                phone_dial: &self.mail.phone_dial,
                inbox: &self.mail.inbox,
                site_url: &self.mail.site_url,
            },
        );
        context.insert("contact", &ContactView::from(contact));
        context
    }

    fn quote_context(&self, request: &QuoteRequest) -> Context {
        let mut context = self.base_context(&request.contact);
        context.insert(
            "package",
            &PackageView {
                hours: request.package.hours,
                price: format_dollars(request.package.price),
            },
        );
        context.insert("addon_lines", &request.addon_lines);
        context.insert("total", &format_dollars(request.breakdown.total()));
        context
    }

    /// Business-facing email for the contact form.
    pub fn contact_business(&self, form: &ContactForm) -> tera::Result<RenderedMessage> {
        let mut context = self.base_context(&form.contact);
        context.insert("event_type", &form.event_type_display());
        context.insert(
            "message_html",
            &form.message.as_deref().map(message_to_html),
        );

        Ok(RenderedMessage {
            subject: format!("New Contact Form Submission from {}", form.contact.full_name),
            html: self.tera.render(CONTACT_BUSINESS, &context)?,
        })
    }

    /// Business-facing email for a quote.
    ///
    /// When the browser's total disagreed with the recomputed one, the
    /// submitted figure is shown as a notice next to the real total.
    pub fn quote_business(&self, request: &QuoteRequest) -> tera::Result<RenderedMessage> {
        let mut context = self.quote_context(request);
        let flagged_total = request
            .client_total
            .filter(|_| request.total_mismatch)
            .map(format_dollars);
        context.insert("client_total", &flagged_total);

        Ok(RenderedMessage {
            subject: format!(
                "New Photo Booth Quote Request from {}",
                request.contact.full_name
            ),
            html: self.tera.render(QUOTE_BUSINESS, &context)?,
        })
    }

    /// Customer confirmation for a quote.
    pub fn quote_customer(&self, request: &QuoteRequest) -> tera::Result<RenderedMessage> {
        let context = self.quote_context(request);

        Ok(RenderedMessage {
            subject: format!("Your Photo Booth Quote from {}", self.mail.name),
            html: self.tera.render(QUOTE_CUSTOMER, &context)?,
        })
    }

    /// Business-facing heads-up that someone started the quote wizard.
    pub fn quote_lead(&self, contact: &ContactInfo) -> tera::Result<RenderedMessage> {
        let context = self.base_context(contact);

        Ok(RenderedMessage {
            subject: format!("New Quote Started by {}", contact.full_name),
            html: self.tera.render(QUOTE_LEAD, &context)?,
        })
    }
}

/// Escape a free-form message and turn its line breaks into `<br>`.
fn message_to_html(message: &str) -> String {
    tera::escape_html(message)
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{validate_and_price, validate_contact, validate_contact_form};
    use crate::models::{
        ContactFormPayload, QuotePayload, RawAddons, RawContact, RawPackage,
    };

    fn renderer() -> NotificationRenderer {
        NotificationRenderer::new(MailSettings::default()).unwrap()
    }

    fn raw_contact(name: &str) -> RawContact {
        RawContact {
            full_name: Some(name.into()),
            email: Some("jordan@example.com".into()),
            phone: Some("(647) 555-0101".into()),
            event_date: Some("2025-01-05".into()),
        }
    }

    fn quote(name: &str, addons: RawAddons, total: Option<u32>) -> QuoteRequest {
        validate_and_price(&QuotePayload {
            contact: Some(raw_contact(name)),
            package: Some(RawPackage {
                hours: Some(4),
                price: Some(1250),
            }),
            addons: Some(addons),
            total,
        })
        .unwrap()
    }

    #[test]
    fn test_quote_business_contents() {
        let request = quote(
            "Jordan Smith",
            RawAddons {
                unlimited_prints: Some(true),
                glam_booth: Some(true),
                waiting_time: Some(0),
            },
            None,
        );
        let message = renderer().quote_business(&request).unwrap();

        assert_eq!(
            message.subject,
            "New Photo Booth Quote Request from Jordan Smith"
        );
        assert!(message.html.contains("Jordan Smith"));
        assert!(message.html.contains("tel:6475550101"));
        assert!(message.html.contains("January 5, 2025"));
        assert!(message.html.contains("4 Hours - $1,250"));
        assert!(message.html.contains("Unlimited Prints - $240"));
        assert!(message.html.contains("Glam Booth - $75"));
        assert!(message.html.contains("$1,565"));
        assert!(!message.html.contains("No add-ons selected"));
        assert!(!message.html.contains("recalculated on the server"));
    }

    #[test]
    fn test_quote_without_addons_says_so() {
        let request = quote("Jordan", RawAddons::default(), None);
        let message = renderer().quote_customer(&request).unwrap();
        assert!(message.html.contains("No add-ons selected"));
    }

    #[test]
    fn test_addon_lines_render_in_order() {
        let request = quote(
            "Jordan",
            RawAddons {
                unlimited_prints: Some(true),
                glam_booth: Some(true),
                waiting_time: Some(2),
            },
            None,
        );
        let html = renderer().quote_customer(&request).unwrap().html;

        let prints = html.find("Unlimited Prints").unwrap();
        let glam = html.find("Glam Booth").unwrap();
        let waiting = html.find("Waiting Time (2 hours)").unwrap();
        assert!(prints < glam && glam < waiting);
    }

    #[test]
    fn test_mismatched_total_is_noted_for_business_only() {
        let request = quote("Jordan", RawAddons::default(), Some(999));
        let renderer = renderer();

        let business = renderer.quote_business(&request).unwrap().html;
        assert!(business.contains("displayed $999"));
        assert!(business.contains("$1,250"));

        let customer = renderer.quote_customer(&request).unwrap().html;
        assert!(!customer.contains("$999"));
    }

    #[test]
    fn test_customer_email_has_business_details() {
        let request = quote("Jordan", RawAddons::default(), None);
        let message = renderer().quote_customer(&request).unwrap();

        assert_eq!(message.subject, "Your Photo Booth Quote from GTA Photo Booths");
        assert!(message.html.contains("Hi Jordan,"));
        assert!(message
            .html
            .contains("https://www.gtaphotobooths.ca/contact.html"));
        assert!(message.html.contains(r#"href="tel:+16473785332""#));
    }

    #[test]
    fn test_user_fields_are_escaped() {
        let request = quote("<script>alert(1)</script>", RawAddons::default(), None);
        let renderer = renderer();

        for html in [
            renderer.quote_business(&request).unwrap().html,
            renderer.quote_customer(&request).unwrap().html,
            renderer.quote_lead(&request.contact).unwrap().html,
        ] {
            assert!(!html.contains("<script>"));
            assert!(html.contains("&lt;script&gt;"));
        }
    }

    #[test]
    fn test_contact_form_message_escaped_with_line_breaks() {
        let form = validate_contact_form(&ContactFormPayload {
            name: Some("Sam".into()),
            email: Some("sam@example.com".into()),
            phone: Some("416-555-0199".into()),
            event_date: Some("2025-06-14".into()),
            event_type: Some("wedding".into()),
            message: Some("Line one\n<b>Line two</b>".into()),
        })
        .unwrap();

        let message = renderer().contact_business(&form).unwrap();
        assert_eq!(message.subject, "New Contact Form Submission from Sam");
        assert!(message.html.contains("Line one<br>&lt;b&gt;Line two&lt;&#x2F;b&gt;"));
        assert!(message.html.contains("Wedding"));
        assert!(message.html.contains("June 14, 2025"));
    }

    #[test]
    fn test_contact_form_optional_sections_omitted() {
        let form = validate_contact_form(&ContactFormPayload {
            name: Some("Sam".into()),
            email: Some("sam@example.com".into()),
            phone: Some("416-555-0199".into()),
            event_date: Some("2025-06-14".into()),
            ..Default::default()
        })
        .unwrap();

        let html = renderer().contact_business(&form).unwrap().html;
        assert!(!html.contains("Event Type"));
        assert!(!html.contains("message-content\">"));
    }

    #[test]
    fn test_lead_message() {
        let contact = validate_contact(&raw_contact("Jordan")).unwrap();
        let message = renderer().quote_lead(&contact).unwrap();
        assert_eq!(message.subject, "New Quote Started by Jordan");
        assert!(message.html.contains("jordan@example.com"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let request = quote("Jordan", RawAddons::default(), None);
        let renderer = renderer();
        assert_eq!(
            renderer.quote_business(&request).unwrap(),
            renderer.quote_business(&request).unwrap()
        );
    }
}
