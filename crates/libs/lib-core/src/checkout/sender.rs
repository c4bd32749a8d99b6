//! Sender form model.
//!
//! The shipping form binds one input per [`SenderField`]. Every input event
//! overwrites exactly that field of the record and leaves the rest alone.

use shared::dto::checkout::SenderInfo;

use crate::error::{AppError, Result};

/// One editable field of [`SenderInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SenderField {
    Contact,
    Name,
    Surname,
    Address,
    Note,
    City,
    PostalCode,
    Province,
    Country,
    SelectedMethod,
}

impl SenderField {
    /// Fields rendered as text inputs on the shipping form, in page order.
    pub const FORM_FIELDS: [SenderField; 9] = [
        SenderField::Contact,
        SenderField::Name,
        SenderField::Surname,
        SenderField::Address,
        SenderField::Note,
        SenderField::City,
        SenderField::PostalCode,
        SenderField::Province,
        SenderField::Country,
    ];

    /// Input `name` attribute, identical to the JSON field name.
    pub fn name(self) -> &'static str {
        match self {
            SenderField::Contact => "contact",
            SenderField::Name => "name",
            SenderField::Surname => "surname",
            SenderField::Address => "address",
            SenderField::Note => "note",
            SenderField::City => "city",
            SenderField::PostalCode => "postalCode",
            SenderField::Province => "province",
            SenderField::Country => "country",
            SenderField::SelectedMethod => "selectedMethod",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "contact" => Some(SenderField::Contact),
            "name" => Some(SenderField::Name),
            "surname" => Some(SenderField::Surname),
            "address" => Some(SenderField::Address),
            "note" => Some(SenderField::Note),
            "city" => Some(SenderField::City),
            "postalCode" => Some(SenderField::PostalCode),
            "province" => Some(SenderField::Province),
            "country" => Some(SenderField::Country),
            "selectedMethod" | "method" => Some(SenderField::SelectedMethod),
            _ => None,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SenderField::Contact => "example@mail.com",
            SenderField::Name => "Name",
            SenderField::Surname => "Surname",
            SenderField::Address => "Address",
            SenderField::Note => "Note (optional)",
            SenderField::City => "City",
            SenderField::PostalCode => "Postal Code",
            SenderField::Province => "Province",
            SenderField::Country => "Country/Region",
            SenderField::SelectedMethod => "Shipping method",
        }
    }

    /// Everything but the note must be filled in.
    pub fn is_required(self) -> bool {
        self != SenderField::Note
    }

    pub fn read(self, sender: &SenderInfo) -> &str {
        match self {
            SenderField::Contact => &sender.contact,
            SenderField::Name => &sender.name,
            SenderField::Surname => &sender.surname,
            SenderField::Address => &sender.address,
            SenderField::Note => sender.note.as_deref().unwrap_or_default(),
            SenderField::City => &sender.city,
            SenderField::PostalCode => &sender.postal_code,
            SenderField::Province => &sender.province,
            SenderField::Country => &sender.country,
            SenderField::SelectedMethod => &sender.selected_method,
        }
    }

    /// Overwrite this field only. An empty note is stored as `None`.
    pub fn write(self, sender: &mut SenderInfo, value: impl Into<String>) {
        let value = value.into();
        match self {
            SenderField::Contact => sender.contact = value,
            SenderField::Name => sender.name = value,
            SenderField::Surname => sender.surname = value,
            SenderField::Address => sender.address = value,
            SenderField::Note => sender.note = Some(value).filter(|note| !note.is_empty()),
            SenderField::City => sender.city = value,
            SenderField::PostalCode => sender.postal_code = value,
            SenderField::Province => sender.province = value,
            SenderField::Country => sender.country = value,
            SenderField::SelectedMethod => sender.selected_method = value,
        }
    }
}

/// Required form fields left blank, in page order.
pub fn missing_required(sender: &SenderInfo) -> Vec<SenderField> {
    let required = SenderField::FORM_FIELDS
        .iter()
        .filter(|field| field.is_required())
        .map(|field| (field.name(), field.read(sender)));

    lib_utils::missing_fields(required)
        .into_iter()
        .filter_map(SenderField::from_name)
        .collect()
}

/// Presence check run when the shipping form is submitted.
///
/// Fails with [`AppError::InvalidInput`] naming every blank required field.
pub fn check_required(sender: &SenderInfo) -> Result<()> {
    let missing = missing_required(sender);
    if missing.is_empty() {
        return Ok(());
    }

    let names: Vec<&str> = missing.iter().map(|field| field.name()).collect();
    Err(AppError::InvalidInput(format!(
        "missing required fields: {}",
        names.join(", ")
    )))
}
