//! View models and the askama templates that render them
//!
//! Templates live in `lunchly-server/templates/`. Each page struct owns
//! plain display data so templates never reach back into the store.

use askama::Template;
use axum::response::Html;

use super::error::AppError;
use crate::models::{start_at, Customer, RankedCustomer, Reservation};

/// Customer as shown on list, detail and form pages.
#[derive(Debug, Clone)]
pub struct CustomerView {
    pub id: i32,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub notes: String,
}

impl CustomerView {
    /// `None` for a customer that hasn't been saved; pages only show stored rows.
    pub fn from_saved(customer: &Customer) -> Option<Self> {
        Some(Self {
            id: customer.id()?.get(),
            full_name: customer.full_name(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            notes: customer.notes().to_owned(),
        })
    }
}

/// One row of the top-customers report.
#[derive(Debug, Clone)]
pub struct RankedCustomerView {
    pub rank: usize,
    pub customer: CustomerView,
    pub reservation_count: i64,
}

/// Reservation with its start time pre-formatted for display and for the edit form.
#[derive(Debug, Clone)]
pub struct ReservationView {
    pub id: i32,
    pub num_guests: i32,
    pub formatted_start_at: String,
    pub start_at_input: String,
    pub notes: String,
}

impl ReservationView {
    pub fn from_saved(reservation: &Reservation) -> Option<Self> {
        Some(Self {
            id: reservation.id()?.get(),
            num_guests: reservation.num_guests(),
            formatted_start_at: reservation.formatted_start_at(),
            start_at_input: reservation
                .start_at()
                .format(start_at::INPUT_FORMAT)
                .to_string(),
            notes: reservation.notes().to_owned(),
        })
    }
}

pub fn customer_views(customers: &[Customer]) -> Vec<CustomerView> {
    customers.iter().filter_map(CustomerView::from_saved).collect()
}

pub fn ranked_views(ranked: &[RankedCustomer]) -> Vec<RankedCustomerView> {
    ranked
        .iter()
        .filter_map(|r| {
            CustomerView::from_saved(&r.customer).map(|customer| (customer, r.reservation_count))
        })
        .enumerate()
        .map(|(i, (customer, reservation_count))| RankedCustomerView {
            rank: i + 1,
            customer,
            reservation_count,
        })
        .collect()
}

pub fn reservation_views(reservations: &[Reservation]) -> Vec<ReservationView> {
    reservations
        .iter()
        .filter_map(ReservationView::from_saved)
        .collect()
}

#[derive(Template)]
#[template(path = "customer_list.html")]
pub struct CustomerListPage {
    pub customers: Vec<CustomerView>,
    pub search: String,
}

#[derive(Template)]
#[template(path = "customer_new_form.html")]
pub struct CustomerNewPage;

#[derive(Template)]
#[template(path = "customer_edit_form.html")]
pub struct CustomerEditPage {
    pub customer: CustomerView,
}

#[derive(Template)]
#[template(path = "customer_detail.html")]
pub struct CustomerDetailPage {
    pub customer: CustomerView,
    pub reservations: Vec<ReservationView>,
}

#[derive(Template)]
#[template(path = "top_ten.html")]
pub struct TopCustomersPage {
    pub customers: Vec<RankedCustomerView>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub reason: &'static str,
    pub message: String,
}

pub fn render_html<T: Template>(page: &T) -> askama::Result<String> {
    page.render()
}

/// Render a page for a handler.
pub fn render<T: Template>(page: &T) -> Result<Html<String>, AppError> {
    Ok(Html(render_html(page)?))
}
