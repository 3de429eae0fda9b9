pub mod generate_handler;
pub mod health_handler;
pub mod mcq_handler;

use actix_web::web;

pub use generate_handler::generate;
pub use health_handler::health_check;
pub use mcq_handler::create_mcqs;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_handler::generate_resource())
        .service(mcq_handler::mcq_resource())
        .service(health_check);
}
