//! Confirmation email rendering

use shared::models::Guest;

use crate::core::config::EventDetails;

pub const CONFIRMATION_SUBJECT: &str = "Confirmación de Asistencia";

/// Content-id the HTML body uses to reference the QR image
pub const QR_CONTENT_ID: &str = "qrcode";

/// Minimal HTML escaping for text interpolated into the template
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// HTML body of the confirmation email. The QR image is referenced by
/// [`QR_CONTENT_ID`] and must be attached inline by the sender.
pub fn render_confirmation(guest: &Guest, event: &EventDetails) -> String {
    let name = escape_html(&guest.name);
    let attendees = guest.total_attendees();
    let date = escape_html(&event.date);
    let time = escape_html(&event.time);
    let venue = escape_html(&event.venue);
    let hosts = escape_html(&event.hosts);

    format!(
        r#"<div style="background-color: #f9f9f9; font-family: Arial, sans-serif; padding: 20px; text-align: center;">
  <div style="max-width: 600px; margin: auto; background-color: #ffffff; border: 1px solid #e0e0e0; border-radius: 8px; overflow: hidden;">
    <div style="background-color: #f3f1eb; padding: 30px 40px;">
      <h2 style="font-family: 'Times New Roman', Times, serif; color: #6d4c41; font-size: 28px; font-weight: normal; margin: 0;">{CONFIRMATION_SUBJECT}</h2>
    </div>
    <div style="padding: 40px; text-align: left; color: #333; font-size: 16px; line-height: 1.6;">
      <p>Hola <strong>{name}</strong>,</p>
      <p>¡Gracias por confirmar tu asistencia a nuestra boda!</p>
      <hr style="border: 0; border-top: 1px solid #e0e0e0; margin: 30px 0;">
      <h3 style="font-family: 'Times New Roman', Times, serif; color: #6d4c41; font-size: 20px; font-weight: normal; margin-top: 0;">Resumen de tu confirmación</h3>
      <p><strong>Invitados confirmados:</strong> {attendees}</p>
      <p>Este es tu código QR de confirmación, por favor muéstralo el día del evento. Te recomendamos <strong>guardar este correo</strong>.</p>
      <div style="text-align: center; margin: 30px 0;">
        <img src="cid:{QR_CONTENT_ID}" alt="Código QR de confirmación" style="max-width: 180px; height: auto; border: 1px solid #6d4c41; padding: 5px;" />
      </div>
      <div style="background-color: #f3f1eb; padding: 20px; border-radius: 5px; text-align: center; margin-top: 30px;">
        <p style="margin: 0; font-size: 14px; color: #6d4c41;">Detalles del evento:</p>
        <p style="margin: 10px 0 0 0; font-size: 16px; font-weight: bold;">{date}<br>{time}</p>
        <p style="margin: 10px 0 0 0; font-size: 15px;">{venue}</p>
      </div>
      <div style="text-align: right; font-family: 'Times New Roman', Times, serif; font-size: 18px; color: #6d4c41; margin-top: 40px;">
        <p style="margin: 0;">Con cariño,</p>
        <p style="margin: 5px 0 0 0; font-weight: bold;">{hosts}</p>
      </div>
    </div>
  </div>
</div>"#
    )
}
