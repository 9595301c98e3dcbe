use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::Method,
    routing::{delete, get, post, put},
    Json,
};
use gobank_core::accounts::{Account, AccountUpdate, NewAccount};
use tracing::info;

use super::Route;
use crate::{error::ApiResult, main_lib::AppState};

async fn create_account(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewAccount>, JsonRejection>,
) -> ApiResult<Json<Account>> {
    let Json(new_account) = payload?;
    let created = state.account_service.create_account(new_account).await?;
    info!(account_id = created.id, "Account created");
    Ok(Json(created))
}

async fn get_account_by_id(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Account>> {
    let Path(id) = id?;
    let account = state.account_service.get_account(id)?;
    Ok(Json(account))
}

async fn update_account(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AccountUpdate>, JsonRejection>,
) -> ApiResult<Json<Account>> {
    let Json(account_update) = payload?;
    let updated = state.account_service.update_account(account_update).await?;
    info!(account_id = updated.id, "Account renamed");
    Ok(Json(updated))
}

/// Deletes an account and answers with the accounts that remain.
async fn delete_account(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<Account>>> {
    let Path(id) = id?;
    info!(account_id = id, "Deleting account");
    state.account_service.delete_account(id).await?;
    let remaining = state.account_service.list_accounts()?;
    Ok(Json(remaining))
}

async fn list_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Account>>> {
    let accounts = state.account_service.list_accounts()?;
    Ok(Json(accounts))
}

pub fn routes() -> Vec<Route> {
    vec![
        Route::new(
            Method::POST,
            "/account/create",
            "create new account",
            post(create_account),
        ),
        Route::new(
            Method::GET,
            "/account/{id}",
            "fetch account by id",
            get(get_account_by_id),
        ),
        Route::new(
            Method::PUT,
            "/account/update",
            "update account information",
            put(update_account),
        ),
        Route::new(
            Method::DELETE,
            "/account/delete/{id}",
            "delete an account",
            delete(delete_account),
        ),
        Route::new(
            Method::GET,
            "/accounts/",
            "retrieve all the accounts",
            get(list_accounts),
        ),
    ]
}
