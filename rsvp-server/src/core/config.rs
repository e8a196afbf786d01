/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PORT | 2002 | HTTP port |
/// | ENVIRONMENT | development | development / production |
/// | DATABASE_URL | sqlite:guests.db | SQLite database, created if missing |
/// | DB_MAX_CONNECTIONS | 10 | Pool size |
/// | EMAIL_HOST | smtp.gmail.com | SMTP relay |
/// | EMAIL_PORT | 465 | SMTP port |
/// | EMAIL_SECURE | false | `true` for implicit TLS, otherwise STARTTLS |
/// | EMAIL_USER / EMAIL_PASSWORD | (empty) | SMTP credentials |
/// | EMAIL_FROM | Nuestra Boda <EMAIL_USER> | Sender mailbox |
/// | FRONTEND_URL | localhost:3000 | Base of the invitation URL |
/// | EVENT_DATE / EVENT_TIME / EVENT_VENUE / EVENT_HOSTS | | Email template details |
/// | LOG_LEVEL | info | Fallback log filter (`RUST_LOG` wins) |
/// | LOG_DIR | (unset) | Daily rolling log files |
///
/// # Example
///
/// ```ignore
/// PORT=8080 DATABASE_URL=sqlite:/data/guests.db cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | production
    pub environment: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub mail: MailConfig,
    pub invitation: InvitationConfig,
    pub log_level: String,
    pub log_dir: Option<String>,
}

/// SMTP relay settings
#[derive(Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    /// Implicit TLS (port 465). `false` upgrades with STARTTLS.
    pub secure: bool,
    pub user: String,
    pub password: String,
    pub from: String,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("user", &self.user)
            .field("password", &"***")
            .field("from", &self.from)
            .finish()
    }
}

/// What goes into the confirmation email and QR code
#[derive(Debug, Clone)]
pub struct InvitationConfig {
    /// Public site hosting `/invitacion/{code}`
    pub frontend_url: String,
    pub event: EventDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub date: String,
    pub time: String,
    pub venue: String,
    /// Signature line, e.g. "Brenda y Jordi"
    pub hosts: String,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            date: "Sábado, 13 de Diciembre de 2025".into(),
            time: "4:00 PM".into(),
            venue: "Jardín Magnolia Morelos".into(),
            hosts: "Brenda y Jordi".into(),
        }
    }
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            frontend_url: "localhost:3000".into(),
            event: EventDetails::default(),
        }
    }
}

impl Config {
    /// Load from the process environment (after `.env`, if the caller loaded it)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing or unparsable values use defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let user = lookup("EMAIL_USER").unwrap_or_default();
        let event_defaults = EventDetails::default();

        Self {
            http_port: parse(lookup("PORT")).unwrap_or(2002),
            environment: text("ENVIRONMENT", "development"),
            database_url: text("DATABASE_URL", "sqlite:guests.db"),
            db_max_connections: parse(lookup("DB_MAX_CONNECTIONS")).unwrap_or(10),
            mail: MailConfig {
                host: text("EMAIL_HOST", "smtp.gmail.com"),
                port: parse(lookup("EMAIL_PORT")).unwrap_or(465),
                secure: parse(lookup("EMAIL_SECURE")).unwrap_or(false),
                from: text("EMAIL_FROM", &format!("Nuestra Boda <{user}>")),
                password: lookup("EMAIL_PASSWORD").unwrap_or_default(),
                user,
            },
            invitation: InvitationConfig {
                frontend_url: text("FRONTEND_URL", "localhost:3000"),
                event: EventDetails {
                    date: text("EVENT_DATE", &event_defaults.date),
                    time: text("EVENT_TIME", &event_defaults.time),
                    venue: text("EVENT_VENUE", &event_defaults.venue),
                    hosts: text("EVENT_HOSTS", &event_defaults.hosts),
                },
            },
            log_level: text("LOG_LEVEL", "info"),
            log_dir: lookup("LOG_DIR").filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
