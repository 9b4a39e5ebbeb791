//! Command handlers that call the planner and render the results.

use anyhow::{bail, Result};
use log::debug;
use wanderlust_core::{
    display::{CreateResult, DeleteResult, DetailTab, DetailView, Destinations},
    models::InterestTag,
    params::{Discover, Id},
    TripPlanner,
};

use crate::{
    commands::{
        DestinationCommands, RecommendationCommands, SavedCommands, ShowDestinationArgs,
        TripCommands,
    },
    renderer::TerminalRenderer,
};

/// Runs one command against a planner and prints the outcome.
pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: TripPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn discover(&self, params: &Discover) -> Result<()> {
        let matches = self.planner.discover(params).await;

        let mut output = String::from("# Discover\n\n");
        if !params.interests.is_empty() {
            let labels: Vec<&str> = params
                .interests
                .iter()
                .map(|tag| InterestTag::label_for(tag))
                .collect();
            output.push_str(&format!("Matching: {}\n\n", labels.join(", ")));
        }
        output.push_str(&format!("{matches}"));

        self.renderer.render(&output)
    }

    pub fn list_interests(&self) -> Result<()> {
        let mut output = String::from("# Interests\n\n");
        for tag in InterestTag::ALL {
            output.push_str(&format!(
                "- **{}**: {} *({})*\n",
                tag,
                tag.label(),
                tag.icon()
            ));
        }
        self.renderer.render(&output)
    }

    pub async fn handle_destination_command(&self, command: DestinationCommands) -> Result<()> {
        match command {
            DestinationCommands::List => {
                let destinations = Destinations(self.planner.list_destinations().await);
                self.renderer.render(&format!("{destinations}"))
            }
            DestinationCommands::Show(args) => self.show_destination(args).await,
            DestinationCommands::Create(args) => {
                let destination = self.planner.create_destination(args.into()).await;
                self.renderer
                    .render(&format!("{}", CreateResult::new(destination)))
            }
            DestinationCommands::Update(args) => {
                let (id, patch) = args.into_params();
                let result = self.planner.update_destination(&id, patch).await?;
                self.renderer.render(&format!("{result}"))
            }
            DestinationCommands::Delete(args) => {
                let destination = self.planner.delete_destination(&args.into()).await?;
                self.renderer
                    .render(&format!("{}", DeleteResult::new(destination)))
            }
        }
    }

    async fn show_destination(&self, args: ShowDestinationArgs) -> Result<()> {
        let id = Id::new(args.id);
        let mut detail = self.planner.destination_detail(&id).await?;

        let mut numbers = args.pack;
        numbers.sort_unstable();
        numbers.dedup();
        for number in numbers {
            if number == 0 || number > detail.packing.len() {
                bail!(
                    "No packing item {number}; the list has {} items",
                    detail.packing.len()
                );
            }
            detail.packing.toggle(number - 1);
        }
        debug!(
            "Packed {} of {} items",
            detail.packing.packed_count(),
            detail.packing.len()
        );

        let mut output = String::new();
        if self.planner.is_saved(&id).await? {
            output.push_str("*Saved*\n\n");
        }
        let view = match args.tab {
            Some(tab) => DetailView::tab(&detail, DetailTab::from(tab)),
            None => DetailView::all(&detail),
        };
        output.push_str(&view.to_string());

        self.renderer.render(&output)
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::List => {
                let trips = self.planner.list_trips().await;
                self.renderer.render(&format!("# Trips\n\n{trips}"))
            }
            TripCommands::Show(args) => {
                let trip = self.planner.show_trip(&args.into()).await?;
                self.renderer.render(&format!("{trip}"))
            }
            TripCommands::Create(args) => {
                let trip = self.planner.create_trip(&args.into()).await?;
                self.renderer.render(&format!("{}", CreateResult::new(trip)))
            }
            TripCommands::Quick(args) => {
                let trip = self.planner.quick_trip(&args.into()).await?;
                self.renderer.render(&format!("{}", CreateResult::new(trip)))
            }
            TripCommands::Delete(args) => {
                if !args.confirm {
                    bail!(
                        "Refusing to delete trip {} without --confirm; deletion cannot be undone",
                        args.id
                    );
                }
                let trip = self.planner.delete_trip(&args.into()).await?;
                self.renderer.render(&format!("{}", DeleteResult::new(trip)))
            }
        }
    }

    pub async fn handle_saved_command(&self, command: SavedCommands) -> Result<()> {
        match command {
            SavedCommands::List => {
                let saved = self.planner.list_saved().await?;
                if saved.is_empty() {
                    return self.renderer.render(
                        "# Saved\n\nNo saved destinations yet. Try `wl saved random`.\n",
                    );
                }
                self.renderer.render(&format!("# Saved\n\n{saved}"))
            }
            SavedCommands::Add(args) => {
                let status = self.planner.save_destination(&args.into()).await?;
                self.renderer.render(&format!("{status}"))
            }
            SavedCommands::Remove(args) => {
                let status = self.planner.unsave_destination(&args.into()).await?;
                self.renderer.render(&format!("{status}"))
            }
            SavedCommands::Random => match self.planner.save_random_destination().await? {
                Some(destination) => self
                    .renderer
                    .render(&format!("Saved a surprise pick:\n\n{destination}")),
                None => self
                    .renderer
                    .render("Every destination is already saved.\n"),
            },
        }
    }

    pub async fn handle_recommendation_command(
        &self,
        command: RecommendationCommands,
    ) -> Result<()> {
        match command {
            RecommendationCommands::List(args) => {
                let recommendations = self.planner.list_recommendations(&args.into()).await;
                self.renderer.render(&format!("{recommendations}"))
            }
            RecommendationCommands::Show(args) => {
                let recommendation = self.planner.get_recommendation(&args.into()).await?;
                self.renderer.render(&format!("{recommendation}"))
            }
            RecommendationCommands::Create(args) => {
                let recommendation = self.planner.create_recommendation(args.into()).await;
                self.renderer
                    .render(&format!("{}", CreateResult::new(recommendation)))
            }
            RecommendationCommands::Update(args) => {
                let (id, patch) = args.into_params();
                let result = self.planner.update_recommendation(&id, patch).await?;
                self.renderer.render(&format!("{result}"))
            }
            RecommendationCommands::Delete(args) => {
                let recommendation = self.planner.delete_recommendation(&args.into()).await?;
                self.renderer
                    .render(&format!("{}", DeleteResult::new(recommendation)))
            }
        }
    }
}
