use std::process::ExitCode;

use futures::{StreamExt, TryStreamExt};
use tracing_subscriber::EnvFilter;

use nvdb_client::client::{ClientConfig, ClientError, NvdbClient};
use nvdb_client::request::{Include, Page, RoadObjectRequest};

const USAGE: &str = "\
Usage:
  nvdb-client links <sequence-id>       - Links of a link sequence
  nvdb-client objects <type-id> [count] - Road objects of a feature type
  nvdb-client feature-type <type-id>    - Feature type with attribute types

Configuration is read from NVDB_* environment variables.";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => return usage(),
    };

    let client = match NvdbClient::new(ClientConfig::from_env()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match (command, rest) {
        ("links", [id]) => match id.parse::<i64>() {
            Ok(id) => print_links(&client, id).await,
            Err(_) => return usage(),
        },
        ("objects", [type_id, count @ ..]) if count.len() <= 1 => {
            let count = count.first().map_or(Some(10), |c| c.parse::<usize>().ok());
            match (type_id.parse::<i32>(), count) {
                (Ok(type_id), Some(count)) => print_objects(&client, type_id, count).await,
                _ => return usage(),
            }
        }
        ("feature-type", [id]) => match id.parse::<i32>() {
            Ok(id) => print_feature_type(&client, id).await,
            Err(_) => return usage(),
        },
        _ => return usage(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn usage() -> ExitCode {
    eprintln!("{USAGE}");
    ExitCode::FAILURE
}

async fn print_links(client: &NvdbClient, id: i64) -> Result<(), ClientError> {
    let links = client.road_net().get_links_in_sequence(id).await?;
    println!("Link sequence {id}: {} links", links.len());

    for link in links {
        let position = match (link.start_position, link.end_position) {
            (Some(start), Some(end)) => format!("{start:.8}-{end:.8}"),
            _ => "?".to_string(),
        };
        let road = link
            .road_sys_ref
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let length = link.length.map(|l| format!("{l:.1} m")).unwrap_or_default();
        println!("  {position:<21} {length:>10}  {road}");
    }

    Ok(())
}

async fn print_objects(client: &NvdbClient, type_id: i32, count: usize) -> Result<(), ClientError> {
    let request = RoadObjectRequest::default()
        .with_includes([Include::Metadata, Include::Attributes])
        .with_page(Page::count(count.clamp(1, 1000) as u32));

    let objects: Vec<_> = client
        .road_objects()
        .get_road_objects(type_id, &request)
        .into_stream()
        .take(count)
        .try_collect()
        .await?;

    for object in objects {
        println!(
            "{} (version {})",
            object.id,
            object.version.map(|v| v.to_string()).unwrap_or_default()
        );
        for attribute in &object.attributes {
            println!(
                "  {:>6} {}: {:?}",
                attribute.id,
                attribute.name.as_deref().unwrap_or("-"),
                attribute.value
            );
        }
    }

    Ok(())
}

async fn print_feature_type(client: &NvdbClient, id: i32) -> Result<(), ClientError> {
    let feature_type = client.datakatalog().get_feature_type(id).await?;
    println!("{} {}", feature_type.id, feature_type.name);

    for attribute_type in &feature_type.attribute_types {
        let required = if attribute_type.required { " (required)" } else { "" };
        println!(
            "  {:>6} {} [{:?}]{required}",
            attribute_type.id,
            attribute_type.name,
            attribute_type.kind.value_kind()
        );
        for value in attribute_type.kind.enum_values() {
            println!("         {:>6} {}", value.id, value.value);
        }
    }

    Ok(())
}
