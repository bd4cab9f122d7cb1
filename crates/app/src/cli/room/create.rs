use clap::Args;
use stayshop_app::{
    database::{self, Db},
    domain::rooms::{
        PgRoomsService, RoomsService,
        data::NewRoom,
        records::RoomUuid,
    },
};
use uuid::Uuid;

use crate::cli::parse_price;

#[derive(Debug, Args)]
pub(crate) struct CreateRoomArgs {
    /// Room number shown to guests; must be unique
    #[arg(long)]
    room_number: String,

    /// Room type, e.g. `single`, `double`, `suite`
    #[arg(long)]
    room_type: String,

    /// Listing title
    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    description: String,

    /// Nightly rate, e.g. `129.99`
    #[arg(long, value_parser = parse_price)]
    price_per_night: u64,

    #[arg(long)]
    max_occupancy: u32,

    /// Repeat for each amenity
    #[arg(long = "amenity")]
    amenities: Vec<String>,

    /// Repeat for each image URL
    #[arg(long = "image")]
    images: Vec<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional room UUID; generated when omitted
    #[arg(long)]
    room_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateRoomArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgRoomsService::new(Db::new(pool));

    let room = service
        .create_room(NewRoom {
            uuid: args.room_uuid.map_or_else(RoomUuid::new, RoomUuid::from_uuid),
            room_number: args.room_number,
            room_type: args.room_type,
            title: args.title,
            description: args.description,
            price_per_night: args.price_per_night,
            max_occupancy: args.max_occupancy,
            amenities: args.amenities,
            images: args.images,
        })
        .await
        .map_err(|error| format!("failed to create room: {error}"))?;

    println!("room_uuid: {}", room.uuid);
    println!("room_number: {}", room.room_number);

    Ok(())
}
