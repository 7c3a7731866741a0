// Visualization page: status pie and occupancy bars.

use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::components::charts;
use crate::constants::MSG_VISUALIZATION_UNAVAILABLE;
use crate::network::ApiClient;
use crate::toast;

pub fn init(document: &Document, api: ApiClient) {
    let document = document.clone();
    spawn_local(async move { load_and_render(&document, &api).await });
}

/// Both aggregations are fetched concurrently; if either fails nothing is
/// drawn.
async fn load_and_render(document: &Document, api: &ApiClient) {
    match futures::try_join!(api.status_counts(), api.occupancy()) {
        Ok((counts, occupancy)) => {
            if let Err(e) = charts::render_status_chart(document, &counts) {
                log::error!("Status chart failed: {:?}", e);
            }
            if let Err(e) = charts::render_occupancy_chart(document, &occupancy) {
                log::error!("Occupancy chart failed: {:?}", e);
            }
        }
        Err(e) => {
            log::error!("Greška pri dohvaćanju podataka za vizualizaciju: {}", e);
            toast::danger(MSG_VISUALIZATION_UNAVAILABLE);
        }
    }
}
