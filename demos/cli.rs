use anyhow::Result;
use std::env;
use synology_download_station::station::DownloadStation;
use synology_download_station::utils::format_duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let station = {
        let host = env::var("SYNO_HOST")?;
        let port = env::var("SYNO_PORT")?.parse()?;
        DownloadStation::builder().host(host).port(port).build()?
    };

    let tasks_api = station.connect(env::var("SYNO_SID")?);

    let tasks = tasks_api.list_all().await?;
    println!("{} task(s)", tasks.total);
    for task in tasks.tasks {
        let eta = task
            .eta_seconds()
            .map(format_duration)
            .unwrap_or_default();
        println!(
            "{} [{:?}] {} {} {:.0}% {} {}",
            task.id,
            task.status,
            task.title,
            task.display_size(),
            task.progress(),
            task.display_speed(),
            eta
        );
    }

    Ok(())
}
