//! Customer identity middleware.
//!
//! The caller asserts who it is acting for with `X-Customer-Id`. Nothing is
//! verified here; handlers only ever see the resulting [`CustomerClaims`].
//!
//! [`CustomerClaims`]: crate::extensions::CustomerClaims

use salvo::prelude::*;
use uuid::Uuid;

use stayshop_app::domain::customers::CustomerUuid;

use crate::extensions::*;

pub(crate) const CUSTOMER_ID_HEADER: &str = "x-customer-id";

#[derive(Debug, PartialEq, Eq)]
enum CustomerHeader {
    Missing,
    Malformed,
    Valid(CustomerUuid),
}

fn read_customer_header(req: &Request) -> CustomerHeader {
    let Some(value) = req.headers().get(CUSTOMER_ID_HEADER) else {
        return CustomerHeader::Missing;
    };

    let Ok(value) = value.to_str() else {
        return CustomerHeader::Malformed;
    };

    let value = value.trim();

    if value.is_empty() {
        return CustomerHeader::Missing;
    }

    Uuid::parse_str(value).map_or(CustomerHeader::Malformed, |uuid| {
        CustomerHeader::Valid(CustomerUuid::from_uuid(uuid))
    })
}

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let customer = match read_customer_header(req) {
        CustomerHeader::Valid(customer) => customer,
        CustomerHeader::Missing => {
            res.render(StatusError::unauthorized().brief("Missing X-Customer-Id header"));
            ctrl.skip_rest();

            return;
        }
        CustomerHeader::Malformed => {
            res.render(StatusError::bad_request().brief("Invalid X-Customer-Id header"));
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_customer(customer);

    ctrl.call_next(req, depot, res).await;
}
