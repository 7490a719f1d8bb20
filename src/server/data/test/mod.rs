mod booking;
mod destination;
mod newsletter;
mod review;
mod user;
