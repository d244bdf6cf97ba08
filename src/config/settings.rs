use serde::Deserialize;

use crate::broker::mailbox::DEFAULT_CAPACITY;

/// Top-level configuration settings for the application.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub broker: BrokerSettings,
    pub store: StoreSettings,
    pub logging: LoggingSettings,
}

/// Address the HTTP server binds to.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Notification broker and streaming parameters.
///
/// `mailbox_capacity` bounds how many undelivered notifications a single
/// connection may have queued before new ones are dropped for it.
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    pub mailbox_capacity: usize,
    pub keep_alive_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Every field is optional; missing values are filled from `Settings::default()`.
#[derive(Debug, Default, Deserialize)]
pub struct PartialSettings {
    pub server: Option<PartialServerSettings>,
    pub broker: Option<PartialBrokerSettings>,
    pub store: Option<PartialStoreSettings>,
    pub logging: Option<PartialLoggingSettings>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PartialBrokerSettings {
    pub mailbox_capacity: Option<usize>,
    pub keep_alive_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PartialStoreSettings {
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PartialLoggingSettings {
    pub level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            broker: BrokerSettings {
                mailbox_capacity: DEFAULT_CAPACITY,
                keep_alive_secs: 15,
            },
            store: StoreSettings {
                path: "data/orders.db".to_string(),
            },
            logging: LoggingSettings {
                level: "info".to_string(),
            },
        }
    }
}

impl Settings {
    /// Overlay whatever `partial` specifies on top of the defaults.
    pub fn merge(partial: PartialSettings) -> Self {
        let default = Settings::default();
        let server = partial.server.unwrap_or_default();
        let broker = partial.broker.unwrap_or_default();
        let store = partial.store.unwrap_or_default();
        let logging = partial.logging.unwrap_or_default();

        Settings {
            server: ServerSettings {
                host: server.host.unwrap_or(default.server.host),
                port: server.port.unwrap_or(default.server.port),
            },
            broker: BrokerSettings {
                mailbox_capacity: broker
                    .mailbox_capacity
                    .unwrap_or(default.broker.mailbox_capacity),
                keep_alive_secs: broker
                    .keep_alive_secs
                    .unwrap_or(default.broker.keep_alive_secs),
            },
            store: StoreSettings {
                path: store.path.unwrap_or(default.store.path),
            },
            logging: LoggingSettings {
                level: logging.level.unwrap_or(default.logging.level),
            },
        }
    }

    /// `host:port` string for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
