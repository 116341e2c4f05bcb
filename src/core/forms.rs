use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Booking,
    Contact,
    ListProperty,
}

pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
}

const fn field(name: &'static str, label: &'static str, input_type: &'static str) -> FormField {
    FormField {
        name,
        label,
        input_type,
    }
}

const BOOKING_FIELDS: &[FormField] = &[
    field("name", "Your name", "text"),
    field("email", "Email", "email"),
    field("date", "Shoot date", "date"),
    field("message", "Details", "textarea"),
];

const CONTACT_FIELDS: &[FormField] = &[
    field("name", "Your name", "text"),
    field("email", "Email", "email"),
    field("message", "Message", "textarea"),
];

const LIST_PROPERTY_FIELDS: &[FormField] = &[
    field("owner", "Owner name", "text"),
    field("email", "Email", "email"),
    field("address", "Property address", "text"),
    field("category", "Category", "text"),
    field("description", "Description", "textarea"),
];

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Booking, FormKind::Contact, FormKind::ListProperty];

    /// Stable element id of the form on its page.
    pub fn element_id(self) -> &'static str {
        match self {
            FormKind::Booking => "booking-form",
            FormKind::Contact => "contact-form",
            FormKind::ListProperty => "list-property-form",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            FormKind::Booking => "/book",
            FormKind::Contact => "/contact",
            FormKind::ListProperty => "/list-property",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormKind::Booking => "Book a location",
            FormKind::Contact => "Contact us",
            FormKind::ListProperty => "List your property",
        }
    }

    pub fn fields(self) -> &'static [FormField] {
        match self {
            FormKind::Booking => BOOKING_FIELDS,
            FormKind::Contact => CONTACT_FIELDS,
            FormKind::ListProperty => LIST_PROPERTY_FIELDS,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FormKind::Booking => {
                "Thank you for your booking request! We will contact you shortly to confirm the details."
            }
            FormKind::Contact => "Thank you for your message! We will get back to you soon.",
            FormKind::ListProperty => {
                "Thank you for listing your property! Our team will review it and reach out to you."
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Acknowledgment {
    pub form: FormKind,
    pub message: &'static str,
    pub received_at: DateTime<Utc>,
}

/// Acknowledges a submission. The submitted values are not kept.
pub fn acknowledge(form: FormKind, submitted_fields: usize) -> Acknowledgment {
    let received_at = Utc::now();
    tracing::info!(
        "📨 {} submitted ({} fields) at {}",
        form.element_id(),
        submitted_fields,
        received_at.to_rfc3339()
    );

    Acknowledgment {
        form,
        message: form.message(),
        received_at,
    }
}
