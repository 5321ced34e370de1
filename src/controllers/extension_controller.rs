use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State, rejection::JsonRejection},
    routing::get,
};

use crate::entities::photo::Photo;
use crate::entities::photo_group::PhotoGroup;
use crate::errors::{GalleryError, GalleryResult};
use crate::extension::index::{METADATA_CREATION_TIMESTAMP, METADATA_NAME};
use crate::extension::{
    Extension, ExtensionClient, ListOptions, ListResult, Order, PageRequest, Sort,
};
use crate::models::validation::StringValidations;
use crate::models::{ListRequest, QueryParams};

use super::Controller;
use super::app_state::AppState;

/// A kind served by the generic `/apis/{group}/{version}/{plural}` routes.
pub trait ExtensionResource: Extension {
    fn client(state: &AppState) -> Arc<dyn ExtensionClient<Self>>;

    fn validate(&self) -> GalleryResult<()> {
        Ok(())
    }

    /// Drops client-supplied state the server derives itself.
    fn sanitize(&mut self) {}
}

impl ExtensionResource for Photo {
    fn client(state: &AppState) -> Arc<dyn ExtensionClient<Self>> {
        state.photos.clone()
    }

    fn validate(&self) -> GalleryResult<()> {
        self.spec.display_name.as_deref().should_not_empty("displayName")?;
        self.spec.url.as_str().should_not_empty("url")?;
        self.spec.group_name.as_str().should_be_token("groupName")?;
        Ok(())
    }
}

impl ExtensionResource for PhotoGroup {
    fn client(state: &AppState) -> Arc<dyn ExtensionClient<Self>> {
        state.groups.clone()
    }

    fn validate(&self) -> GalleryResult<()> {
        self.spec.display_name.as_deref().should_not_empty("displayName")?;
        Ok(())
    }

    // photoCount is recomputed on every read, never stored
    fn sanitize(&mut self) {
        self.status = None;
    }
}

pub struct ExtensionController;

impl Controller for ExtensionController {
    fn routes() -> Router<AppState> {
        Router::new()
            .merge(resource_routes::<Photo>())
            .merge(resource_routes::<PhotoGroup>())
    }
}

pub fn resource_path<E: Extension>() -> String {
    let gvk = E::gvk();
    format!("/apis/{}/{}", gvk.api_version(), gvk.plural)
}

fn resource_routes<E: ExtensionResource>() -> Router<AppState> {
    let path = resource_path::<E>();
    Router::new()
        .route(&path, get(list_extensions::<E>).post(create_extension::<E>))
        .route(
            &format!("{path}/{{name}}"),
            get(get_extension::<E>)
                .put(update_extension::<E>)
                .delete(delete_extension::<E>),
        )
}

/// Endpoints of a kind vanish while its scheme is unregistered.
fn ensure_registered<E: Extension>(state: &AppState) -> GalleryResult<()> {
    let kind = E::gvk().kind;
    match state.schemes.get(kind) {
        Some(_) => Ok(()),
        None => Err(GalleryError::not_found(format!("no scheme registered for {kind}"))),
    }
}

async fn list_extensions<E: ExtensionResource>(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> GalleryResult<Json<ListResult<E>>> {
    ensure_registered::<E>(&state)?;
    let params = QueryParams::parse(raw.as_deref().unwrap_or_default());
    let request = ListRequest::from_params(&params);
    let options = ListOptions::from_selectors(&request.label_selector, &request.field_selector)?;
    let sort = Sort::by(Order::desc(METADATA_CREATION_TIMESTAMP)).then(Order::asc(METADATA_NAME));
    let page = PageRequest::of(request.page, request.size).with_sort(sort);

    let result = E::client(&state).list_by(&options, &page).await?;
    Ok(Json(result))
}

async fn get_extension<E: ExtensionResource>(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> GalleryResult<Json<E>> {
    ensure_registered::<E>(&state)?;
    let extension = fetch_required::<E>(&state, &name).await?;
    Ok(Json(extension))
}

async fn create_extension<E: ExtensionResource>(
    State(state): State<AppState>,
    payload: Result<Json<E>, JsonRejection>,
) -> GalleryResult<Json<E>> {
    ensure_registered::<E>(&state)?;
    let Json(mut extension) = payload?;
    extension.validate()?;
    extension.sanitize();
    let created = E::client(&state).create(extension).await?;
    log::debug!("Created {} {}", E::gvk().kind, created.name());
    Ok(Json(created))
}

async fn update_extension<E: ExtensionResource>(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<E>, JsonRejection>,
) -> GalleryResult<Json<E>> {
    ensure_registered::<E>(&state)?;
    let Json(mut extension) = payload?;
    if extension.name() != name {
        return Err(GalleryError::invalid_input(format!(
            "metadata.name {} does not match path {}",
            extension.name(),
            name
        )));
    }
    extension.validate()?;
    extension.sanitize();
    let updated = E::client(&state).update(extension).await?;
    Ok(Json(updated))
}

async fn delete_extension<E: ExtensionResource>(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> GalleryResult<Json<E>> {
    ensure_registered::<E>(&state)?;
    let extension = fetch_required::<E>(&state, &name).await?;
    let deleted = E::client(&state).delete(extension).await?;
    log::info!("Deleted {} {}", E::gvk().kind, name);
    Ok(Json(deleted))
}

async fn fetch_required<E: ExtensionResource>(state: &AppState, name: &str) -> GalleryResult<E> {
    E::client(state)
        .fetch(name)
        .await?
        .ok_or_else(|| GalleryError::not_found(format!("{} {} not found", E::gvk().kind, name)))
}
