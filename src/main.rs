use clap::Parser;
use shop_cart::core::cart;
use shop_cart::domain::ports::{ConfigProvider, Notifier};
use shop_cart::utils::{logger, validation::Validate};
use shop_cart::{
    Cart, CartCommand, CartStore, CliConfig, ConsoleNotifier, HttpCatalog, LocalStorage, Outcome,
    StoreSettings, TomlConfig, TracingNotifier, UpdateProductAmount,
};

struct Wiring {
    catalog: HttpCatalog,
    storage: LocalStorage,
    settings: StoreSettings,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let wiring = match wire(&cli) {
        Ok(wiring) => wiring,
        Err(e) => {
            tracing::error!("Configuration rejected: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // JSON logging means a collector is reading stderr; keep toasts out of it.
    let outcome = if cli.json_logs {
        run(&cli.command, store(wiring, TracingNotifier)).await
    } else {
        run(&cli.command, store(wiring, ConsoleNotifier)).await
    };

    if outcome == Outcome::Rejected {
        std::process::exit(2);
    }
    Ok(())
}

fn wire(cli: &CliConfig) -> shop_cart::Result<Wiring> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading settings from {}", path.display());
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            wire_from(&config, config.settings())
        }
        None => {
            cli.validate()?;
            wire_from(cli, StoreSettings::from_provider(cli))
        }
    }
}

fn wire_from<C: ConfigProvider>(config: &C, settings: StoreSettings) -> shop_cart::Result<Wiring> {
    Ok(Wiring {
        catalog: HttpCatalog::from_config(config)?,
        storage: LocalStorage::new(config.storage_path()),
        settings,
    })
}

fn store<N: Notifier>(wiring: Wiring, notifier: N) -> CartStore<HttpCatalog, LocalStorage, N> {
    CartStore::new(wiring.catalog, wiring.storage, notifier, wiring.settings)
}

async fn run<N: Notifier>(
    command: &CartCommand,
    mut store: CartStore<HttpCatalog, LocalStorage, N>,
) -> Outcome {
    let outcome = match *command {
        CartCommand::Add { product_id } => store.add(product_id).await,
        CartCommand::Remove { product_id } => store.remove(product_id),
        CartCommand::Update { product_id, amount } => {
            store
                .update_quantity(UpdateProductAmount { product_id, amount })
                .await
        }
        CartCommand::List => Outcome::Ignored,
    };

    print_cart(&store.cart());
    outcome
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    println!("🛒 Cart ({} items):", cart.len());
    for item in cart.iter() {
        match item.product.title() {
            Some(title) => println!("  - #{} {} x{}", item.id(), title, item.quantity),
            None => println!("  - #{} x{}", item.id(), item.quantity),
        }
    }
    println!("  Total quantity: {}", cart::total_quantity(cart));
}
