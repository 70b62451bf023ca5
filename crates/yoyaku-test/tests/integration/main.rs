mod helpers;

mod availability;
mod bookings;
