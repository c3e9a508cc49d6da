use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use service::catalog::CatalogStore;
use service::file::product_db::{Product, ProductInput};

use crate::errors::PageError;
use crate::templates;

/// Handler state: the catalog behind its trait seam.
pub type SharedStore = Arc<dyn CatalogStore>;

/// Form body for add/edit. A single `name` field; an absent field counts as
/// an empty name, there is no further validation.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
}

impl From<ProductForm> for ProductInput {
    fn from(form: ProductForm) -> Self {
        ProductInput { name: form.name }
    }
}

fn require_id(id: &str) -> Result<(), PageError> {
    if id.trim().is_empty() {
        return Err(PageError::BadRequest("missing product id".into()));
    }
    Ok(())
}

/// GET `/` — the product list, ordered by numeric id for stable output.
pub async fn list_products(State(store): State<SharedStore>) -> Html<String> {
    let mut products: Vec<Product> = store.all().await.into_values().collect();
    products.sort_by_key(|p| p.id.parse::<u64>().unwrap_or(u64::MAX));
    templates::products_page(&products)
}

/// GET `/add` — empty product form.
pub async fn new_product_form() -> Html<String> {
    templates::product_form_page(None)
}

/// POST `/add` — create from the form and bounce back to the list.
pub async fn create_product(
    State(store): State<SharedStore>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, PageError> {
    store.add(form.into()).await?;
    Ok(Redirect::to("/"))
}

/// GET `/{id}/edit` — form pre-filled with the stored product.
pub async fn edit_product_form(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    require_id(&id)?;
    let product = store.get(&id).await?;
    Ok(templates::product_form_page(Some(&product)))
}

/// POST `/{id}/edit` — overwrite and bounce back to the list.
pub async fn update_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, PageError> {
    require_id(&id)?;
    store.edit(&id, form.into()).await?;
    Ok(Redirect::to("/"))
}

/// GET `/{id}/remove` — confirmation page; the delete happens on the post.
pub async fn remove_product_confirm(Path(id): Path<String>) -> Result<Html<String>, PageError> {
    require_id(&id)?;
    Ok(templates::confirm_remove_page(&id))
}

/// POST `/{id}/remove` — delete and bounce back to the list.
pub async fn delete_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    require_id(&id)?;
    store.remove(&id).await?;
    Ok(Redirect::to("/"))
}
