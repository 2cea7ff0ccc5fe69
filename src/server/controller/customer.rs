use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        customer::{CreateCustomerDto, CustomerDto, PaginatedCustomersDto, UpdateCustomerDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::customer::{CreateCustomerParams, UpdateCustomerParams},
        service::customer::CustomerService,
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

#[derive(Deserialize)]
pub struct CustomerListParams {
    #[serde(default = "super::default_page")]
    pub page: u64,
    #[serde(default = "super::default_per_page")]
    pub per_page: u64,
    pub search: Option<String>,
}

/// Register a customer. Customers are shared across parks, so any
/// authenticated staff member can create one.
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Phone number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CustomerService::new(&state.db);
    let customer = service
        .create_customer(CreateCustomerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(customer.into_dto())))
}

/// List customers, optionally filtered by a name or phone search term.
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
        ("search" = Option<String>, Query, description = "Match against name and phone")
    ),
    responses(
        (status = 200, description = "Paginated customers", body = PaginatedCustomersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CustomerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (page, per_page) = PaginationParams {
        page: params.page,
        per_page: params.per_page,
    }
    .clamp();

    let service = CustomerService::new(&state.db);
    let customers = service
        .get_all_customers(params.search.as_deref(), page, per_page)
        .await?;

    Ok(Json(customers.into_dto()))
}

/// Get a single customer.
#[utoipa::path(
    get,
    path = "/api/customers/{customer_id}",
    tag = CUSTOMER_TAG,
    params(
        ("customer_id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer", body = CustomerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    session: Session,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CustomerService::new(&state.db);
    let customer = service.get_customer(customer_id).await?;

    Ok(Json(customer.into_dto()))
}

/// Update a customer.
#[utoipa::path(
    put,
    path = "/api/customers/{customer_id}",
    tag = CUSTOMER_TAG,
    params(
        ("customer_id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Phone number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    session: Session,
    Path(customer_id): Path<i32>,
    Json(payload): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CustomerService::new(&state.db);
    let customer = service
        .update_customer(UpdateCustomerParams::from_dto(customer_id, payload))
        .await?;

    Ok(Json(customer.into_dto()))
}

/// Remove a customer and their booking history.
#[utoipa::path(
    delete,
    path = "/api/customers/{customer_id}",
    tag = CUSTOMER_TAG,
    params(
        ("customer_id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    session: Session,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CustomerService::new(&state.db);
    service.delete_customer(customer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
