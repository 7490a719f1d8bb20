use sea_orm::DatabaseConnection;

use crate::server::{config::DEV_JWT_SECRET, service::token::TokenService};

mod destination;

fn tokens() -> TokenService {
    TokenService::new(DEV_JWT_SECRET)
}

async fn destination_rating(db: &DatabaseConnection, id: i32) -> (f64, i32) {
    let destination = crate::server::data::destination::DestinationRepository::new(db)
        .find_by_id(id)
        .await
        .unwrap()
        .unwrap();

    (destination.rating_average, destination.rating_count)
}
