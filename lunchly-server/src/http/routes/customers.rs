//! Customer pages: list/search, add, detail, edit, top ten

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::http::error::AppError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::http::views::{
    self, customer_views, ranked_views, reservation_views, CustomerDetailPage, CustomerEditPage,
    CustomerListPage, CustomerNewPage, CustomerView, TopCustomersPage,
};
use crate::models::{non_blank, Customer, CustomerId, ValidationError, TOP_CUSTOMERS_DEFAULT_LIMIT};

/// Query string for the customer list
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// Fields posted by the add and edit customer forms
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CustomerForm {
    /// Both names are required; everything else is optional.
    fn names(&self) -> Result<(String, String), ValidationError> {
        let first = self.first_name.trim();
        if first.is_empty() {
            return Err(ValidationError::Empty { field: "first name" });
        }
        let last = self.last_name.trim();
        if last.is_empty() {
            return Err(ValidationError::Empty { field: "last name" });
        }
        Ok((first.to_owned(), last.to_owned()))
    }

    fn into_customer(self) -> Result<Customer, ValidationError> {
        let (first, last) = self.names()?;
        Ok(Customer::new(first, last, non_blank(self.phone), self.notes))
    }

    fn apply_to(self, customer: &mut Customer) -> Result<(), ValidationError> {
        let (first, last) = self.names()?;
        customer.first_name = first;
        customer.last_name = last;
        customer.phone = non_blank(self.phone);
        customer.set_notes(self.notes);
        Ok(())
    }
}

fn customer_url(id: CustomerId) -> String {
    format!("/{}/", id)
}

/// Detail and edit pages need a saved customer's view.
fn saved_view(customer: &Customer) -> Result<CustomerView, AppError> {
    CustomerView::from_saved(customer).ok_or(AppError::NotFound {
        resource: "customer",
        id: String::new(),
    })
}

/// GET / - all customers, or those matching `?search=`
async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, AppError> {
    let term = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let customers = match term {
        None => Customer::all(state.store()).await?,
        Some(term) => Customer::filter_by_name(state.store(), term).await?,
    };

    views::render(&CustomerListPage {
        customers: customer_views(&customers),
        search: term.unwrap_or_default().to_owned(),
    })
}

/// GET /add/ - new customer form
async fn new_customer_form() -> Result<Html<String>, AppError> {
    views::render(&CustomerNewPage)
}

/// POST /add/ - create a customer
async fn create_customer(
    State(state): State<AppState>,
    Form(form): Form<CustomerForm>,
) -> Result<Redirect, AppError> {
    let mut customer = form.into_customer()?;
    let id = customer.save(state.store()).await?;
    tracing::info!(customer_id = %id, name = %customer.full_name(), "added customer");

    Ok(Redirect::to(&customer_url(id)))
}

/// GET /top-ten/ - customers with the most reservations
async fn top_ten(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let ranked = Customer::filter_top_customers(state.store(), TOP_CUSTOMERS_DEFAULT_LIMIT).await?;

    views::render(&TopCustomersPage {
        customers: ranked_views(&ranked),
    })
}

/// GET /{id}/ - customer detail with reservations
async fn customer_detail(
    State(state): State<AppState>,
    ValidId(id): ValidId<CustomerId>,
) -> Result<Html<String>, AppError> {
    let customer = Customer::get(state.store(), id).await?;
    let reservations = customer.get_reservations(state.store()).await?;

    views::render(&CustomerDetailPage {
        customer: saved_view(&customer)?,
        reservations: reservation_views(&reservations),
    })
}

/// GET /{id}/edit/ - edit form
async fn edit_customer_form(
    State(state): State<AppState>,
    ValidId(id): ValidId<CustomerId>,
) -> Result<Html<String>, AppError> {
    let customer = Customer::get(state.store(), id).await?;

    views::render(&CustomerEditPage {
        customer: saved_view(&customer)?,
    })
}

/// POST /{id}/edit/ - overwrite name, phone and notes
async fn update_customer(
    State(state): State<AppState>,
    ValidId(id): ValidId<CustomerId>,
    Form(form): Form<CustomerForm>,
) -> Result<Redirect, AppError> {
    let mut customer = Customer::get(state.store(), id).await?;
    form.apply_to(&mut customer)?;
    customer.save(state.store()).await?;

    Ok(Redirect::to(&customer_url(id)))
}

/// Customer routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers))
        .route("/add/", get(new_customer_form).post(create_customer))
        .route("/top-ten/", get(top_ten))
        .route("/{id}/", get(customer_detail))
        .route("/{id}/edit/", get(edit_customer_form).post(update_customer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(first: &str, last: &str, phone: Option<&str>, notes: Option<&str>) -> CustomerForm {
        CustomerForm {
            first_name: first.into(),
            last_name: last.into(),
            phone: phone.map(Into::into),
            notes: notes.map(Into::into),
        }
    }

    #[test]
    fn form_requires_names() {
        let err = form("  ", "Smith", None, None).into_customer().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "first name" });

        let err = form("Jo", "", None, None).into_customer().unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "last name" });
    }

    #[test]
    fn form_normalizes_optional_fields() {
        let customer = form(" Jo ", "Smith", Some(""), Some("")).into_customer().unwrap();
        assert_eq!(customer.first_name, "Jo");
        assert_eq!(customer.phone, None);
        assert_eq!(customer.notes(), "");
    }

    #[test]
    fn apply_overwrites_fields() {
        let mut customer = Customer::new("Old", "Name", Some("1".into()), Some("x".into()));
        form("New", "Person", Some("555"), None)
            .apply_to(&mut customer)
            .unwrap();
        assert_eq!(customer.full_name(), "New Person");
        assert_eq!(customer.phone.as_deref(), Some("555"));
        assert_eq!(customer.notes(), "");
    }
}
