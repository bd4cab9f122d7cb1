use clap::Args;
use stayshop_app::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService, data::NewProduct, records::ProductUuid},
};
use uuid::Uuid;

use crate::cli::parse_price;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    description: String,

    /// Unit price, e.g. `12.50`
    #[arg(long, value_parser = parse_price)]
    price: u64,

    #[arg(long)]
    category: String,

    #[arg(long, default_value_t = 0)]
    stock_quantity: u32,

    /// Repeat for each image URL
    #[arg(long = "image")]
    images: Vec<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    product_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    let product = service
        .create_product(NewProduct {
            uuid: args
                .product_uuid
                .map_or_else(ProductUuid::new, ProductUuid::from_uuid),
            name: args.name,
            description: args.description,
            price: args.price,
            category: args.category,
            stock_quantity: args.stock_quantity,
            images: args.images,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_name: {}", product.name);

    Ok(())
}
