use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use serde::Serialize;

use amarshop::admin::{DashboardStats, NewProductForm};
use amarshop::catalog::{filter_products, CatalogQuery, CategoryFilter, SortOption};
use amarshop::checkout::Checkout;
use amarshop::cli::{AdminCommand, CartCommand, CheckoutArgs, Cli, Command};
use amarshop::config::Config;
use amarshop::domain::{Category, OrderStatus, PaymentMethod, Role};
use amarshop::logging::init_tracing;
use amarshop::server::views::{CartView, ProductCard};
use amarshop::server::{AppState, StorefrontServer};
use amarshop::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use amarshop::store::{Outcome, Store};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    init_tracing(default_level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.dir = dir.clone();
    }
    if let Command::Serve { bind: Some(bind) } = &cli.command {
        config.server.bind_addr = bind.clone();
    }
    config.validate()?;
    Ok(config)
}

fn open_store(cli: &Cli, config: &Config) -> anyhow::Result<Store> {
    let storage: Arc<dyn KeyValueStorage> = if cli.ephemeral {
        Arc::new(MemoryStorage::new())
    } else {
        Arc::new(FileStorage::new(config.storage.dir.clone()))
    };
    Store::open(storage).with_context(|| {
        format!(
            "Could not open store in '{}'",
            config.storage.dir.display()
        )
    })
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let store = open_store(&cli, &config)?;
    let checkout = Checkout::new(store.clone(), &config.checkout);

    match cli.command {
        Command::Serve { .. } => {
            let mut server = StorefrontServer::new(AppState::new(store, checkout));
            let addr = server
                .try_bind(&config.server)
                .await
                .map_err(|e| anyhow!(e))?;
            println!("Storefront listening on http://{}", addr);
            server.run().await.map_err(|e| anyhow!(e))?;
        }

        Command::Catalog {
            category,
            sort,
            search,
        } => {
            let query = CatalogQuery {
                category: category.parse::<CategoryFilter>()?,
                sort: sort.parse::<SortOption>().map_err(|e| anyhow!(e))?,
                search,
            };
            let cards: Vec<ProductCard> = filter_products(&store.products(), &query)
                .into_iter()
                .map(ProductCard::from)
                .collect();
            print_json(&cards)?;
        }

        Command::Product { id } => {
            let product = store
                .product(&id)
                .ok_or_else(|| anyhow!("Product '{}' not found", id))?;
            print_json(&ProductCard::from(product))?;
        }

        Command::Cart(command) => match command {
            CartCommand::Show => {
                print_json(&CartView::of(&store.cart(), checkout.shipping_fee()))?;
            }
            CartCommand::Add { product_id } => report(store.add_to_cart_by_id(&product_id))?,
            CartCommand::Remove { product_id } => report(store.remove_from_cart(&product_id))?,
            CartCommand::Set {
                product_id,
                quantity,
            } => report(store.update_quantity(&product_id, quantity))?,
            CartCommand::Clear => report(store.clear_cart())?,
        },

        Command::Login { identifier, admin } => {
            let role = if admin { Role::Admin } else { Role::Customer };
            report(store.login(&identifier, role))?;
        }

        Command::Logout => report(store.logout())?,

        Command::Checkout(args) => {
            let order = checkout_from_args(&checkout, args).await?;
            print_json(&order)?;
        }

        Command::Orders => print_json(&store.orders())?,

        Command::Theme { toggle } => {
            let theme = if toggle {
                store.toggle_theme()
            } else {
                store.theme()
            };
            println!("{}", theme.as_str());
        }

        Command::Admin(command) => match command {
            AdminCommand::Stats => {
                store.require_admin("view_dashboard")?;
                let state = store.snapshot();
                print_json(&DashboardStats::compute(&state.products, &state.orders))?;
            }
            AdminCommand::AddProduct {
                name,
                price,
                image,
                stock,
                category,
                description,
            } => {
                store.require_admin("add_product")?;
                let category = category
                    .map(|c| c.parse::<Category>())
                    .transpose()?;
                let form = NewProductForm {
                    name,
                    price,
                    stock,
                    category,
                    image,
                    description,
                };
                let product = form.into_product(store.tick().to_string())?;
                report(store.add_product(product))?;
            }
            AdminCommand::DeleteProduct { product_id } => {
                report(store.delete_product(&product_id))?
            }
            AdminCommand::SetStatus { order_id, status } => {
                let status = status.parse::<OrderStatus>().map_err(|e| anyhow!(e))?;
                report(store.update_order_status(&order_id, status))?;
            }
        },
    }

    Ok(())
}

async fn checkout_from_args(
    checkout: &Checkout,
    args: CheckoutArgs,
) -> anyhow::Result<amarshop::domain::Order> {
    let mut form = checkout.prefilled_form();
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(phone) = args.phone {
        form.phone = phone;
    }
    if let Some(address) = args.address {
        form.address = address;
    }
    if let Some(city) = args.city {
        form.city = city;
    }
    form.payment_method = args
        .payment
        .parse::<PaymentMethod>()
        .map_err(|e| anyhow!(e))?;
    form.pin = args.pin;

    if form.payment_method.is_prepaid() {
        eprintln!("Processing {} payment...", form.payment_method);
    }
    Ok(checkout.submit(form).await?)
}

fn report(outcome: Outcome) -> anyhow::Result<()> {
    match outcome {
        Outcome::Rejected(reason) => bail!(reason),
        other => {
            println!("{}", other.as_str());
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
