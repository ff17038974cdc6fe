use iced::{Application, Command, Element, Theme};
use crate::client::models::form_state::FormState;
use crate::client::models::messages::Message;
use crate::client::services::crew_service::CrewService;
use log::{debug, info};

pub struct CrewFormApp {
    pub state: FormState,
    pub crew_service: CrewService,
}

impl Application for CrewFormApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = CrewService;

    fn new(crew_service: CrewService) -> (Self, Command<Message>) {
        info!("Crew form ready, endpoint {}", crew_service.endpoint());
        let app = CrewFormApp {
            state: FormState::default(),
            crew_service,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Get Crew Data".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::None => Command::none(),
            Message::AddressChanged(address) => {
                self.state.set_address(address);
                Command::none()
            }
            Message::Submit => {
                // The button is disabled while loading; Enter in the input is gated the same way.
                if !self.state.can_submit() {
                    return Command::none();
                }
                let ticket = self.state.begin_submission();
                let address = self.state.address.clone();
                let svc = self.crew_service.clone();
                info!("Submitting address to {}", svc.endpoint());
                Command::perform(
                    async move { svc.fetch_crew(&address).await },
                    move |outcome| Message::CrewFetched { ticket, outcome },
                )
            }
            Message::CrewFetched { ticket, outcome } => {
                if let Err(e) = &outcome {
                    debug!("Crew submission failed: {}", e);
                }
                self.state.complete(ticket, outcome);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::crew_form::view(&self.state)
    }
}
