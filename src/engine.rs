use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::assets;
use crate::errors::{FabricaError, Result};
use crate::fields::FieldKind;
use crate::generators::{self, GeneratedValue, GeneratorContext, PlateStyle};
use crate::model::{
    DEFAULT_DB_FILE, DEFAULT_EXCEL_FILE, DEFAULT_TABLE_NAME, SqliteOptions, Table, TableOptions,
};
use crate::output;

/// Construction settings for [`Fabricator`].
#[derive(Debug, Clone, Default)]
pub struct FabricatorOptions {
    /// Seed for the instance RNG; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Override path for the city reference list.
    pub city_list: Option<PathBuf>,
    /// Override path for the email-domain reference list.
    pub domain_list: Option<PathBuf>,
    /// Legacy parity mode: re-seed the RNG at the start of every series and
    /// before every locally formatted draw. With a fixed seed this makes
    /// series of locally formatted values constant.
    pub reseed_every_call: bool,
}

/// Synthetic data factory.
///
/// Owns a deterministic RNG and the city/domain reference lists; every
/// value drawn by this instance flows through its own stream, so distinct
/// instances never interfere.
#[derive(Debug, Clone)]
pub struct Fabricator {
    seed: Option<u64>,
    reseed_every_call: bool,
    rng: ChaCha8Rng,
    cities: Vec<String>,
    domains: Vec<String>,
}

impl Fabricator {
    /// Load the reference lists and seed the instance RNG.
    pub fn new(options: FabricatorOptions) -> Result<Self> {
        let cities = assets::load_city_list(options.city_list.as_deref())?;
        let domains = assets::load_domain_list(options.domain_list.as_deref())?;
        let rng = match options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Ok(Self {
            seed: options.seed,
            reseed_every_call: options.reseed_every_call,
            rng,
            cities,
            domains,
        })
    }

    /// Deterministic factory with bundled reference lists.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::new(FabricatorOptions {
            seed: Some(seed),
            ..FabricatorOptions::default()
        })
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Draw a single value for `kind`.
    pub fn value(&mut self, kind: FieldKind) -> GeneratedValue {
        if parity_reseed_kind(kind) {
            self.compat_reseed();
        }
        let ctx = GeneratorContext {
            cities: &self.cities,
        };
        generators::generate(kind, &ctx, &mut self.rng)
    }

    /// 10-digit phone number in `NNN-NNN-NNNN` form.
    pub fn simple_phone(&mut self) -> String {
        self.compat_reseed();
        generators::semantic::simple_phone(&mut self.rng)
    }

    /// Vehicle license plate; a style is picked uniformly when unspecified.
    pub fn license_plate(&mut self, style: Option<PlateStyle>) -> String {
        self.compat_reseed();
        generators::semantic::license_plate(&mut self.rng, style)
    }

    /// Email address derived from `full_name` and a domain from the
    /// reference list.
    pub fn realistic_email(&mut self, full_name: &str) -> String {
        self.compat_reseed();
        generators::semantic::realistic_email(&mut self.rng, &self.domains, full_name)
    }

    /// Uniform draw from the curated city list.
    pub fn real_city(&mut self) -> String {
        self.compat_reseed();
        generators::semantic::real_city(&self.cities, &mut self.rng)
    }

    /// Build an ordered series of `count` values for `field_name`.
    pub fn build_series(&mut self, count: i64, field_name: &str) -> Result<Vec<GeneratedValue>> {
        let kind = FieldKind::parse(field_name)?;
        let rows = validate_count(count)?;
        self.compat_reseed();
        Ok((0..rows).map(|_| self.value(kind)).collect())
    }

    /// Build a table of `count` rows over `fields`, applying the
    /// substitution switches in `options`.
    ///
    /// The first field is built as requested; for the rest, `phone`
    /// resolves to one of the phone formats (column `phone-number`),
    /// `license_plate` lands in column `license-plate`, and `city` uses the
    /// curated list when `options.real_city` is set. A requested `email`
    /// column is rewritten from the name columns when `options.real_email`
    /// is set and a name is available.
    pub fn build_table(
        &mut self,
        count: i64,
        fields: &[&str],
        options: &TableOptions,
    ) -> Result<Table> {
        let rows = validate_count(count)?;
        if fields.is_empty() {
            return Err(FabricaError::InvalidArgument(
                "at least one field is required".to_string(),
            ));
        }

        let mut table = Table::default();
        table.push_column(fields[0], self.build_series(count, fields[0])?);

        for &field in &fields[1..] {
            match field {
                "phone" => {
                    let kind = if options.phone_simple {
                        FieldKind::PhoneNumberSimple
                    } else {
                        FieldKind::PhoneNumberFull
                    };
                    table.push_column("phone-number", self.build_series(count, kind.as_str())?);
                }
                "license_plate" => {
                    table.push_column("license-plate", self.build_series(count, field)?);
                }
                "city" if options.real_city => {
                    table.push_column(
                        "city",
                        self.build_series(count, FieldKind::RealCity.as_str())?,
                    );
                }
                _ => {
                    table.push_column(field, self.build_series(count, field)?);
                }
            }
        }

        if fields.contains(&"email") && options.real_email {
            let names: Option<Vec<String>> = if fields.contains(&"name") {
                table
                    .column("name")
                    .map(|column| column.values.iter().map(GeneratedValue::render).collect())
            } else if fields.contains(&"first_name") && fields.contains(&"last_name") {
                match (table.column("first_name"), table.column("last_name")) {
                    (Some(first), Some(last)) => Some(
                        first
                            .values
                            .iter()
                            .zip(&last.values)
                            .map(|(f, l)| format!("{} {}", f.render(), l.render()))
                            .collect(),
                    ),
                    _ => None,
                }
            } else {
                None
            };

            if let Some(names) = names {
                let linked: Vec<GeneratedValue> = names
                    .iter()
                    .map(|name| GeneratedValue::Text(self.realistic_email(name)))
                    .collect();
                if let Some(column) = table.column_mut("email") {
                    column.values = linked;
                }
            }
        }

        debug!(rows, columns = table.num_columns(), "table assembled");
        Ok(table)
    }

    /// Generate a table and write it into a SQLite database file.
    ///
    /// Any pre-existing table of the target name is dropped first. When the
    /// designated primary key is not among the requested fields the export
    /// logs a warning and returns `Ok(None)` without recreating the table.
    pub async fn export_sqlite(
        &mut self,
        count: i64,
        fields: &[&str],
        table_options: &TableOptions,
        sqlite_options: &SqliteOptions,
    ) -> Result<Option<Table>> {
        validate_count(count)?;
        if fields.is_empty() {
            return Err(FabricaError::InvalidArgument(
                "at least one field is required".to_string(),
            ));
        }

        let db_file = sqlite_options
            .db_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));
        let table_name = sqlite_options
            .table_name
            .as_deref()
            .unwrap_or(DEFAULT_TABLE_NAME);

        let mut conn = output::sqlite::open(&db_file).await?;
        output::sqlite::drop_table(&mut conn, table_name).await?;

        let primary_key = sqlite_options.primary_key.as_deref().unwrap_or(fields[0]);
        if !fields.contains(&primary_key) {
            warn!(
                primary_key,
                table = table_name,
                "primary key is not among the requested fields, not generating the table"
            );
            output::sqlite::close(conn).await?;
            return Ok(None);
        }

        output::sqlite::create_table(&mut conn, table_name, fields, primary_key).await?;
        let table = self.build_table(count, fields, table_options)?;
        output::sqlite::insert_rows(&mut conn, table_name, &table).await?;
        output::sqlite::close(conn).await?;

        info!(
            rows = table.num_rows(),
            table = table_name,
            db_file = %db_file.display(),
            "sqlite export completed"
        );
        Ok(Some(table))
    }

    /// Generate a table and write it to an Excel workbook
    /// (`NewExcel.xlsx` when no path is given).
    pub fn export_excel(
        &mut self,
        count: i64,
        fields: &[&str],
        table_options: &TableOptions,
        path: Option<&Path>,
    ) -> Result<Table> {
        let table = self.build_table(count, fields, table_options)?;
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_EXCEL_FILE));
        output::xlsx::write_table_xlsx(path, &table)?;
        info!(
            rows = table.num_rows(),
            path = %path.display(),
            "excel export completed"
        );
        Ok(table)
    }

    fn compat_reseed(&mut self) {
        if self.reseed_every_call
            && let Some(seed) = self.seed
        {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
    }
}

// Draws that re-seed per call in legacy parity mode; every other field
// re-seeds once per series.
fn parity_reseed_kind(kind: FieldKind) -> bool {
    matches!(
        kind,
        FieldKind::RealCity | FieldKind::PhoneNumberSimple | FieldKind::LicensePlate
    )
}

fn validate_count(count: i64) -> Result<usize> {
    if count <= 0 {
        return Err(FabricaError::InvalidArgument(format!(
            "number of samples must be a positive integer, found {count}"
        )));
    }
    Ok(count as usize)
}
