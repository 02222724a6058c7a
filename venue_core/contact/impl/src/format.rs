//! Rendering of event inquiries as emails for the venue staff.
//!
//! The "Additional Details" section is part of both bodies if and only if the
//! inquiry carries non-empty additional details.

use venue_email_contracts::{Email, EmailBody};
use venue_models::{email_address::EmailAddress, inquiry::InquiryRequest};

pub const VENUE_NAME: &str = "The Opera House";

pub fn format_inquiry(
    inquiry: &InquiryRequest,
    sender: &EmailAddress,
    recipient: &EmailAddress,
) -> Email {
    Email {
        sender: sender.clone(),
        recipient: recipient.clone(),
        subject: format!(
            "New Event Inquiry - {} for {}",
            *inquiry.event_type, *inquiry.full_name
        ),
        body: EmailBody::Alternative {
            text: format_text(inquiry),
            html: format_html(inquiry),
        },
    }
}

fn format_text(inquiry: &InquiryRequest) -> String {
    let additional_details = if inquiry.additional_details.is_empty() {
        String::new()
    } else {
        format!("Additional Details:\n{}\n\n", *inquiry.additional_details)
    };

    format!(
        "NEW EVENT INQUIRY - {venue}\n\
         \n\
         Contact Information:\n\
         Full Name: {full_name}\n\
         Phone: {phone}\n\
         \n\
         Event Details:\n\
         Event Type: {event_type}\n\
         Event Date: {event_date}\n\
         Guest Count: {guest_count} guests\n\
         \n\
         {additional_details}\
         This inquiry was submitted through {VENUE_NAME} website contact form.\n",
        venue = VENUE_NAME.to_uppercase(),
        full_name = *inquiry.full_name,
        phone = *inquiry.phone,
        event_type = *inquiry.event_type,
        event_date = *inquiry.event_date,
        guest_count = inquiry.guest_count,
    )
}

fn format_html(inquiry: &InquiryRequest) -> String {
    let full_name = escape_html(&inquiry.full_name);
    let phone = escape_html(&inquiry.phone);
    let event_type = escape_html(&inquiry.event_type);
    let event_date = escape_html(&inquiry.event_date);
    let guest_count = inquiry.guest_count;

    let additional_details = if inquiry.additional_details.is_empty() {
        String::new()
    } else {
        format!(
            r##"
  <div style="background-color: #2a2a2a; padding: 25px; border-left: 4px solid #d4af37; margin-bottom: 20px;">
    <h2 style="color: #d4af37; font-size: 20px; margin: 0 0 15px 0;">Additional Details</h2>
    <p style="color: #e5e5e5; line-height: 1.6; margin: 0;">{}</p>
  </div>"##,
            escape_html(&inquiry.additional_details)
        )
    };

    format!(
        r##"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; background-color: #1a1a1a; color: #e5e5e5; padding: 20px; border: 2px solid #d4af37;">
  <div style="text-align: center; margin-bottom: 30px;">
    <h1 style="color: #d4af37; font-size: 28px; margin: 0; font-weight: 300;">{VENUE_NAME}</h1>
    <div style="width: 80px; height: 1px; background-color: #d4af37; margin: 10px auto;"></div>
    <p style="color: #b8b8b8; font-size: 16px; margin: 10px 0;">New Event Inquiry</p>
  </div>
  <div style="background-color: #2a2a2a; padding: 25px; border-left: 4px solid #d4af37; margin-bottom: 20px;">
    <h2 style="color: #d4af37; font-size: 20px; margin: 0 0 15px 0;">Contact Information</h2>
    <table style="width: 100%; color: #e5e5e5;">
      <tr>
        <td style="padding: 8px 0; font-weight: bold; color: #d4af37; width: 120px;">Full Name:</td>
        <td style="padding: 8px 0;">{full_name}</td>
      </tr>
      <tr>
        <td style="padding: 8px 0; font-weight: bold; color: #d4af37;">Phone:</td>
        <td style="padding: 8px 0;">{phone}</td>
      </tr>
    </table>
  </div>
  <div style="background-color: #2a2a2a; padding: 25px; border-left: 4px solid #d4af37; margin-bottom: 20px;">
    <h2 style="color: #d4af37; font-size: 20px; margin: 0 0 15px 0;">Event Details</h2>
    <table style="width: 100%; color: #e5e5e5;">
      <tr>
        <td style="padding: 8px 0; font-weight: bold; color: #d4af37; width: 120px;">Event Type:</td>
        <td style="padding: 8px 0;">{event_type}</td>
      </tr>
      <tr>
        <td style="padding: 8px 0; font-weight: bold; color: #d4af37;">Event Date:</td>
        <td style="padding: 8px 0;">{event_date}</td>
      </tr>
      <tr>
        <td style="padding: 8px 0; font-weight: bold; color: #d4af37;">Guest Count:</td>
        <td style="padding: 8px 0;">{guest_count} guests</td>
      </tr>
    </table>
  </div>{additional_details}
  <div style="text-align: center; margin-top: 30px; padding-top: 20px; border-top: 1px solid #444;">
    <p style="color: #b8b8b8; font-size: 14px; margin: 0;">This inquiry was submitted through {VENUE_NAME} website contact form.</p>
    <p style="color: #b8b8b8; font-size: 14px; margin: 10px 0 0 0;">Please respond within 24 hours for the best customer experience.</p>
  </div>
</div>
"##
    )
}

fn escape_html(value: &str) -> String {
    html_escape::encode_quoted_attribute(value).into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use venue_models::inquiry::InquiryForm;

    use super::*;

    fn inquiry(additional_details: Option<&str>) -> InquiryRequest {
        InquiryForm {
            full_name: Some("Jane Doe".into()),
            phone: Some("+91 9911620620".into()),
            event_type: Some("Wedding".into()),
            event_date: Some("2025-12-01".into()),
            guest_count: Some("150".into()),
            additional_details: additional_details.map(Into::into),
        }
        .try_into()
        .unwrap()
    }

    fn sender() -> EmailAddress {
        "website@operahouse.example".parse().unwrap()
    }

    fn recipient() -> EmailAddress {
        "events@operahouse.example".parse().unwrap()
    }

    fn bodies(email: &Email) -> (&str, &str) {
        match &email.body {
            EmailBody::Alternative { text, html } => (text.as_str(), html.as_str()),
            EmailBody::Text(_) => panic!("expected multipart/alternative body"),
        }
    }

    #[test]
    fn subject_and_addresses() {
        // Act
        let email = format_inquiry(&inquiry(None), &sender(), &recipient());

        // Assert
        assert_eq!(email.subject, "New Event Inquiry - Wedding for Jane Doe");
        assert_eq!(email.sender, sender());
        assert_eq!(email.recipient, recipient());
    }

    #[test]
    fn text_body() {
        // Act
        let email = format_inquiry(&inquiry(None), &sender(), &recipient());

        // Assert
        let (text, _) = bodies(&email);
        assert_eq!(
            text,
            "NEW EVENT INQUIRY - THE OPERA HOUSE\n\
             \n\
             Contact Information:\n\
             Full Name: Jane Doe\n\
             Phone: +91 9911620620\n\
             \n\
             Event Details:\n\
             Event Type: Wedding\n\
             Event Date: 2025-12-01\n\
             Guest Count: 150 guests\n\
             \n\
             This inquiry was submitted through The Opera House website contact form.\n"
        );
    }

    #[test]
    fn html_body() {
        // Act
        let email = format_inquiry(&inquiry(None), &sender(), &recipient());

        // Assert
        let (_, html) = bodies(&email);
        assert!(html.contains(">The Opera House</h1>"));
        assert!(html.contains(">Jane Doe</td>"));
        assert!(html.contains(">+91 9911620620</td>"));
        assert!(html.contains(">Wedding</td>"));
        assert!(html.contains(">2025-12-01</td>"));
        assert!(html.contains(">150 guests</td>"));
    }

    #[test]
    fn no_additional_details_section() {
        // Act
        let email = format_inquiry(&inquiry(Some("   ")), &sender(), &recipient());

        // Assert
        let (text, html) = bodies(&email);
        assert!(!text.contains("Additional Details"));
        assert!(!html.contains("Additional Details"));
    }

    #[test]
    fn additional_details_section() {
        // Act
        let email = format_inquiry(
            &inquiry(Some("  Vegetarian menu for 20 guests.  ")),
            &sender(),
            &recipient(),
        );

        // Assert
        let (text, html) = bodies(&email);
        assert_eq!(text.matches("Additional Details").count(), 1);
        assert!(text.contains("Additional Details:\nVegetarian menu for 20 guests.\n\n"));
        assert_eq!(html.matches("Additional Details").count(), 1);
        assert!(html.contains(">Vegetarian menu for 20 guests.</p>"));
    }

    #[test]
    fn escapes_html() {
        // Arrange
        let inquiry = InquiryRequest {
            full_name: "Jane <b>Doe</b>".to_owned().try_into().unwrap(),
            ..inquiry(Some("Tom & Jerry's \"party\""))
        };

        // Act
        let email = format_inquiry(&inquiry, &sender(), &recipient());

        // Assert
        let (text, html) = bodies(&email);
        assert!(html.contains(">Jane &lt;b&gt;Doe&lt;/b&gt;</td>"));
        assert!(!html.contains("<b>Doe"));
        assert!(html.contains(">Tom &amp; Jerry"));
        assert!(html.contains("&quot;party&quot;</p>"));
        assert!(!html.contains("Jerry's"));
        assert!(text.contains("Full Name: Jane <b>Doe</b>\n"));
        assert_eq!(email.subject, "New Event Inquiry - Wedding for Jane <b>Doe</b>");
    }

    #[test]
    fn idempotent() {
        // Arrange
        let inquiry = inquiry(Some("Late check-in"));

        // Act
        let first = format_inquiry(&inquiry, &sender(), &recipient());
        let second = format_inquiry(&inquiry, &sender(), &recipient());

        // Assert
        assert_eq!(first, second);
    }
}
