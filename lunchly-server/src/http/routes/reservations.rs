//! Reservation form handlers

use axum::{extract::State, response::Redirect, routing::post, Form, Router};
use serde::Deserialize;

use crate::http::error::AppError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{Customer, CustomerId, Reservation, ReservationId};

/// Fields posted by the add and edit reservation forms
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    #[serde(default)]
    pub start_at: String,
    #[serde(default)]
    pub num_guests: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// POST /{id}/add-reservation/ - book a reservation for the customer
async fn add_reservation(
    State(state): State<AppState>,
    ValidId(customer_id): ValidId<CustomerId>,
    Form(form): Form<ReservationForm>,
) -> Result<Redirect, AppError> {
    let num_guests = Reservation::parse_num_guests(&form.num_guests)?;
    let mut reservation = Reservation::new(customer_id, &form.start_at, num_guests, form.notes)?;

    // 404 for an unknown customer instead of a foreign key failure
    Customer::get(state.store(), customer_id).await?;
    reservation.save(state.store()).await?;

    Ok(Redirect::to(&format!("/{}/", customer_id)))
}

/// POST /reservations/{id}/edit - change guests, start time and notes
async fn update_reservation(
    State(state): State<AppState>,
    ValidId(id): ValidId<ReservationId>,
    Form(form): Form<ReservationForm>,
) -> Result<Redirect, AppError> {
    let mut reservation = Reservation::get(state.store(), id).await?;
    reservation.set_num_guests(Reservation::parse_num_guests(&form.num_guests)?)?;
    reservation.set_start_at(&form.start_at)?;
    reservation.set_notes(form.notes);
    reservation.save(state.store()).await?;

    let target = match reservation.customer_id() {
        Some(customer_id) => format!("/{}/", customer_id),
        None => "/".to_owned(),
    };
    Ok(Redirect::to(&target))
}

/// Reservation routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/add-reservation/", post(add_reservation))
        .route("/reservations/{id}/edit", post(update_reservation))
}
