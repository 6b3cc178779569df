// Letter of Authorization renderer.
//
// `generate` is a deterministic transform from a complete `LoaData`
// record to PDF bytes, apart from the issue date which is taken at
// render time. The legal wording lives in the three template constants
// and can change without touching any layout or pipeline code.

pub mod layout;
pub mod metrics;

use chrono::NaiveDate;

use layout::{Align, DocBuilder, Style};

const TEMPL_AUTHORIZATION: &str = "Please use this letter as authorization to {partner} (Partner) or their designated agent(s) to order/run a cross-connect towards the following demarcation point of {our_name}. This LOA does not obligate {our_name} to be billed for any services.";

const TEMPL_EXPIRY: &str = "This LOA expires {expiry_days} calendar days from the date of issue if not used, upon notification to Partner by {our_name} or on the date that the cross-connect is installed, whichever is earlier. It is not automatically re-usable by Partner or their designated agent(s).";

const TEMPL_CONTACT: &str = "Please contact the {our_short} NOC after the work has been done with information about the used port. Should you have any questions or concern regarding this LOA please contact {our_short} NOC.";

/// The flat, request-scoped document record: resolved location facts,
/// free-text partner fields, and the issuing tenant's identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoaData {
    // location side
    pub site_facility: String,
    pub rack_facility_id: String,
    pub rack_position: f64,
    pub device_name: String,
    pub rear_port_name: String,

    // partner side, free text from the request
    pub partner: String,
    pub partner_street: String,
    pub partner_city: String,

    // own-organization side, from the tenant registry
    pub our_name: String,
    pub our_short: String,
    pub our_street: String,
    pub our_city: String,
    pub our_noc_name: String,
    pub our_noc_email: String,
    pub our_noc_phone: String,
    pub expiry_days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("template placeholder {{{0}}} is not bound")]
    MissingVar(String),

    #[error("unterminated placeholder in template")]
    UnterminatedPlaceholder,

    #[error("pdf engine error: {0}")]
    Engine(String),
}

/// Substitute `{name}` placeholders. Values are inserted verbatim, so
/// braces in free-text fields cannot re-trigger substitution.
fn fill(template: &str, vars: &[(&str, &str)]) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or(RenderError::UnterminatedPlaceholder)?;
        let name = &after[..end];
        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| RenderError::MissingVar(name.to_string()))?;
        out.push_str(value);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Rack units render with no unnecessary trailing zeros: U12 for a
/// whole-number position, U12.5 for a half-unit one.
fn format_rack_unit(position: f64) -> String {
    format!("{position}")
}

/// The location table's panel cell: `Rack <facilityId> U<position> - <deviceName>`.
pub fn demarc_panel(facility_id: &str, position: f64, device_name: &str) -> String {
    format!(
        "Rack {} U{} - {}",
        facility_id,
        format_rack_unit(position),
        device_name
    )
}

/// Render the letter with the issue date taken now.
pub fn generate(data: &LoaData) -> Result<Vec<u8>, RenderError> {
    render_document(data, chrono::Local::now().date_naive())
}

fn render_document(data: &LoaData, issued: NaiveDate) -> Result<Vec<u8>, RenderError> {
    let expiry_days = data.expiry_days.to_string();
    let authorization = fill(
        TEMPL_AUTHORIZATION,
        &[("partner", data.partner.as_str()), ("our_name", data.our_name.as_str())],
    )?;
    let expiry = fill(
        TEMPL_EXPIRY,
        &[("expiry_days", expiry_days.as_str()), ("our_name", data.our_name.as_str())],
    )?;
    let contact = fill(TEMPL_CONTACT, &[("our_short", data.our_short.as_str())])?;

    let mut doc = DocBuilder::new("Letter of Authorization")?;

    // Addressed parties: partner left, own organization right.
    doc.text(0, 8, 0.0, &data.partner, Style::BoldItalic, Align::Left);
    doc.text(0, 8, 4.0, &data.partner_street, Style::Regular, Align::Left);
    doc.text(0, 8, 8.0, &data.partner_city, Style::Regular, Align::Left);
    doc.text(9, 3, 0.0, &data.our_name, Style::BoldItalic, Align::Right);
    doc.text(9, 3, 4.0, &data.our_street, Style::Regular, Align::Right);
    doc.text(9, 3, 8.0, &data.our_city, Style::Regular, Align::Right);
    doc.advance(20.0);

    doc.text(0, 6, 0.0, "Letter of Authorization", Style::Bold, Align::Left);
    doc.text(
        6,
        6,
        0.0,
        &issued.format("%d. %B %Y").to_string(),
        Style::Regular,
        Align::Right,
    );
    doc.advance(15.0);

    doc.text(0, 12, 0.0, "To whom it may concern:", Style::Regular, Align::Left);
    doc.advance(10.0);

    doc.paragraph(0, 12, &authorization, Style::Regular);
    doc.advance(15.0);

    // Location table: blank lead column, label, value.
    let panel = demarc_panel(&data.rack_facility_id, data.rack_position, &data.device_name);
    let rows = [
        ("Site", data.site_facility.as_str()),
        ("Demarcation Panel", panel.as_str()),
        ("Demarcation Port", data.rear_port_name.as_str()),
    ];
    for (i, (label, value)) in rows.iter().enumerate() {
        let dy = i as f64 * 5.0;
        doc.text(1, 3, dy, label, Style::Regular, Align::Left);
        doc.text(4, 8, dy, value, Style::Regular, Align::Left);
    }
    doc.advance(17.0);

    doc.paragraph(0, 12, &expiry, Style::Regular);
    doc.advance(15.0);

    doc.paragraph(0, 12, &contact, Style::Regular);
    doc.advance(15.0);

    doc.text(1, 11, 0.0, &data.our_noc_name, Style::Regular, Align::Left);
    doc.text(1, 11, 5.0, &data.our_noc_email, Style::Regular, Align::Left);
    doc.text(1, 11, 10.0, &data.our_noc_phone, Style::Regular, Align::Left);
    doc.advance(20.0);

    doc.text(0, 12, 0.0, "Yours sincerely,", Style::Regular, Align::Left);
    doc.text(0, 12, 8.0, &data.our_name, Style::BoldItalic, Align::Left);

    doc.finish()
}
