//! Writes the JSON schema of the todoql configuration file to `schema.json`
//! at build time.
