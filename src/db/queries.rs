//! Database queries for vehicles, bookings and rental requests

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Booking, NewRentalRequest, RentalRequest, Vehicle};

/// Get a vehicle's pricing row by id
pub async fn get_vehicle(pool: &PgPool, id: Uuid) -> Result<Vehicle> {
    let vehicle = sqlx::query_as::<_, Vehicle>(
        r#"
        SELECT
            id,
            name,
            price_per_day,
            discount_percent,
            available
        FROM cars
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))?;

    Ok(vehicle)
}

/// Get the non-cancelled bookings of a vehicle that may touch `[from, to]`.
///
/// Rows with a missing date are kept; the overlap check skips them.
pub async fn list_vehicle_bookings(
    pool: &PgPool,
    car_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(
        r#"
        SELECT
            id,
            car_id,
            start_date,
            end_date,
            start_time,
            end_time,
            status
        FROM bookings
        WHERE car_id = $1
          AND LOWER(status) NOT IN ('cancelled', 'canceled')
          AND (start_date IS NULL OR start_date <= $3)
          AND (end_date IS NULL OR end_date >= $2)
        ORDER BY start_date NULLS LAST, start_time NULLS LAST
        "#,
    )
    .bind(car_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Insert a rental request and return its id and status
pub async fn insert_rental_request(pool: &PgPool, request: &NewRentalRequest) -> Result<RentalRequest> {
    let created = sqlx::query_as::<_, RentalRequest>(
        r#"
        INSERT INTO rental_requests (
            car_id,
            user_id,
            full_name,
            email,
            phone,
            pickup_at,
            return_at,
            rental_days,
            extra_hours,
            add_ons,
            total_price,
            currency,
            status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, 'pending')
        RETURNING id, status, created_at
        "#,
    )
    .bind(request.car_id)
    .bind(request.user_id)
    .bind(&request.full_name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(request.pickup_at)
    .bind(request.return_at)
    .bind(request.rental_days)
    .bind(request.extra_hours)
    .bind(&request.add_ons)
    .bind(request.total_price)
    .bind(&request.currency)
    .fetch_one(pool)
    .await?;

    Ok(created)
}
