pub const SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY,
    email TEXT UNIQUE NOT NULL,
    username TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS trips (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES users(id),
    name TEXT NOT NULL,
    start_time TIMESTAMPTZ NOT NULL,
    end_time TIMESTAMPTZ,
    distance DOUBLE PRECISION NOT NULL DEFAULT 0,
    duration DOUBLE PRECISION,
    status TEXT NOT NULL DEFAULT 'active',
    source TEXT,
    destination TEXT,
    vehicle_make TEXT,
    vehicle_model TEXT,
    vehicle_year INTEGER,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS points (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    trip_id UUID NOT NULL REFERENCES trips(id),
    latitude DOUBLE PRECISION NOT NULL,
    longitude DOUBLE PRECISION NOT NULL,
    altitude DOUBLE PRECISION,
    accuracy DOUBLE PRECISION,
    speed DOUBLE PRECISION,
    heading DOUBLE PRECISION,
    timestamp TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS point_batches (
    trip_id UUID NOT NULL REFERENCES trips(id),
    batch_id UUID NOT NULL,
    received_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (trip_id, batch_id)
);
"#,
    r#"
CREATE INDEX IF NOT EXISTS idx_points_trip_timestamp ON points (trip_id, timestamp);
"#,
];

pub const INSERT_USER: &str = r#"
INSERT INTO users (id, email, username, password_hash, created_at)
VALUES ($1, $2, $3, $4, $5);
"#;

pub const SELECT_USER_BY_IDENTIFIER: &str = r#"
SELECT id, email, username, password_hash, created_at
FROM users WHERE email = $1 OR username = $1;
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, email, username, password_hash, created_at
FROM users WHERE id = $1;
"#;

pub const INSERT_TRIP: &str = r#"
INSERT INTO trips (id, user_id, name, start_time, status, source, destination,
                   vehicle_make, vehicle_model, vehicle_year, created_at)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11);
"#;

pub const COMPLETE_TRIP: &str = r#"
UPDATE trips
SET end_time = $1,
    status = 'completed',
    duration = EXTRACT(EPOCH FROM ($1 - start_time))
WHERE id = $2 AND user_id = $3 AND status = 'active'
RETURNING id, user_id, name, start_time, end_time, distance, duration, status,
          source, destination, vehicle_make, vehicle_model, vehicle_year;
"#;

pub const SELECT_TRIP_STATUS: &str = r#"
SELECT status FROM trips WHERE id = $1 AND user_id = $2;
"#;

pub const SELECT_TRIPS_BY_USER: &str = r#"
SELECT id, user_id, name, start_time, end_time, distance, duration, status,
       source, destination, vehicle_make, vehicle_model, vehicle_year
FROM trips WHERE user_id = $1 ORDER BY start_time DESC;
"#;

pub const INSERT_POINT: &str = r#"
INSERT INTO points (trip_id, latitude, longitude, altitude, accuracy, speed, heading, timestamp)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8);
"#;

pub const INSERT_POINT_BATCH: &str = r#"
INSERT INTO point_batches (trip_id, batch_id)
VALUES ($1, $2)
ON CONFLICT (trip_id, batch_id) DO NOTHING;
"#;

pub const SELECT_POINTS_BY_TRIP: &str = r#"
SELECT latitude, longitude, altitude, accuracy, speed, heading, timestamp
FROM points WHERE trip_id = $1 ORDER BY timestamp ASC;
"#;
