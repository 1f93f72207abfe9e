pub const INSERT_INCIDENT: &str = r#"
INSERT INTO incidents (
    id, property_name, reporter_type, reporter_name, reporter_contact,
    category, description, urgency, status, provider_id, photo_urls,
    created_at, updated_at, resolved_at
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14);
"#;

pub const SELECT_INCIDENT: &str = r#"
SELECT id, property_name, reporter_type, reporter_name, reporter_contact,
       category, description, urgency, status, provider_id, photo_urls,
       created_at, updated_at, resolved_at
FROM incidents
WHERE id = $1;
"#;

pub const LIST_INCIDENTS_DESC: &str = r#"
SELECT id, property_name, reporter_type, reporter_name, reporter_contact,
       category, description, urgency, status, provider_id, photo_urls,
       created_at, updated_at, resolved_at
FROM incidents
WHERE ($1::incident_status IS NULL OR status = $1)
  AND ($2::text IS NULL OR category = $2)
  AND ($3::text IS NULL OR property_name ILIKE '%' || $3 || '%' OR description ILIKE '%' || $3 || '%')
  AND ($4::text[] IS NULL OR property_name = ANY($4))
ORDER BY created_at DESC;
"#;

pub const LIST_INCIDENTS_ASC: &str = r#"
SELECT id, property_name, reporter_type, reporter_name, reporter_contact,
       category, description, urgency, status, provider_id, photo_urls,
       created_at, updated_at, resolved_at
FROM incidents
WHERE ($1::incident_status IS NULL OR status = $1)
  AND ($2::text IS NULL OR category = $2)
  AND ($3::text IS NULL OR property_name ILIKE '%' || $3 || '%' OR description ILIKE '%' || $3 || '%')
  AND ($4::text[] IS NULL OR property_name = ANY($4))
ORDER BY created_at ASC;
"#;

pub const UPDATE_INCIDENT: &str = r#"
UPDATE incidents
SET status = $2,
    resolved_at = $3,
    updated_at = $4,
    provider_id = COALESCE($5, provider_id)
WHERE id = $1;
"#;

pub const COUNT_INCIDENTS_BY_STATUS: &str = r#"
SELECT
    COUNT(*) FILTER (WHERE status = 'nuevo') AS new_count,
    COUNT(*) FILTER (WHERE status = 'asignado') AS assigned_count,
    COUNT(*) FILTER (WHERE status = 'en_progreso') AS in_progress_count,
    COUNT(*) FILTER (WHERE status = 'resuelto') AS resolved_count
FROM incidents;
"#;

pub const INSERT_INCIDENT_UPDATE: &str = r#"
INSERT INTO incident_updates (id, incident_id, message, status_change, created_by, created_at)
VALUES ($1, $2, $3, $4, $5, $6);
"#;

pub const LIST_INCIDENT_UPDATES: &str = r#"
SELECT id, incident_id, message, status_change, created_by, created_at
FROM incident_updates
WHERE incident_id = $1
ORDER BY created_at ASC, seq ASC;
"#;

pub const INSERT_PROVIDER: &str = r#"
INSERT INTO providers (id, name, category, phone, email, notes, active, created_at)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8);
"#;

pub const SELECT_PROVIDER: &str = r#"
SELECT id, name, category, phone, email, notes, active, created_at
FROM providers
WHERE id = $1;
"#;

pub const LIST_PROVIDERS: &str = r#"
SELECT id, name, category, phone, email, notes, active, created_at
FROM providers
WHERE ($1::boolean IS NULL OR active = $1)
  AND (NOT $2::boolean OR category = $3 OR category = 'general')
ORDER BY name ASC;
"#;

pub const UPDATE_PROVIDER: &str = r#"
UPDATE providers
SET name = $2, category = $3, phone = $4, email = $5, notes = $6
WHERE id = $1;
"#;

pub const SET_PROVIDER_ACTIVE: &str = r#"
UPDATE providers SET active = $2 WHERE id = $1;
"#;

pub const DELETE_PROVIDER: &str = r#"
DELETE FROM providers WHERE id = $1;
"#;
