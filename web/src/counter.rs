use crate::error::{WiringError, require_provider};
use std::rc::Rc;
use tallytoe_core as model;
use yew::prelude::*;

/// Counter state shared through [`CounterProvider`].
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct CounterState {
    counter: model::Counter,
}

impl Reducible for CounterState {
    type Action = model::CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut counter = self.counter;
        counter.apply(action);
        log::debug!(
            "counter {:?}: {} -> {}",
            action,
            self.counter.count(),
            counter.count()
        );
        Rc::new(Self { counter })
    }
}

pub(crate) type CounterHandle = UseReducerHandle<CounterState>;

/// What the stats panel shows for a counter value.
#[derive(Clone, Debug, PartialEq)]
struct CounterStats {
    count: String,
    status: &'static str,
    value: String,
}

impl From<&model::Counter> for CounterStats {
    fn from(counter: &model::Counter) -> Self {
        Self {
            count: counter.count().to_string(),
            status: counter.sign().label(),
            value: counter.magnitude().to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CounterProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the counter and hands it to every descendant that calls [`use_counter`].
#[function_component]
pub(crate) fn CounterProvider(props: &CounterProviderProps) -> Html {
    let counter = use_reducer(CounterState::default);

    html! {
        <ContextProvider<CounterHandle> context={counter}>
            {props.children.clone()}
        </ContextProvider<CounterHandle>>
    }
}

#[hook]
pub(crate) fn use_counter() -> Result<CounterHandle, WiringError> {
    require_provider(use_context::<CounterHandle>(), "use_counter", "CounterProvider")
}

#[function_component]
pub(crate) fn CounterView() -> Html {
    // A missing provider is an integration bug, fail before rendering anything.
    let counter = use_counter().unwrap_or_else(|err| panic!("{}", err));
    let CounterStats {
        count,
        status,
        value,
    } = CounterStats::from(&counter.counter);

    let dispatch = |action: model::CounterAction| {
        let counter = counter.clone();
        Callback::from(move |_: MouseEvent| counter.dispatch(action))
    };
    let on_decrement = dispatch(model::CounterAction::Decrement);
    let on_increment = dispatch(model::CounterAction::Increment);
    let on_reset = dispatch(model::CounterAction::Reset);

    html! {
        <section class="counter">
            <header>
                <h1>{"Counter App"}</h1>
                <p>{"Simple shared-state counter"}</p>
            </header>
            <figure>
                <output class="count">{count}</output>
                <figcaption>{"Current Count"}</figcaption>
            </figure>
            <nav>
                <button class="decrement" onclick={on_decrement}>{"-"}</button>
                <button class="increment" onclick={on_increment}>{"+"}</button>
                <button class="reset" onclick={on_reset}>{"Reset"}</button>
            </nav>
            <dl class="stats">
                <dt>{"Status"}</dt>
                <dd class="status">{status}</dd>
                <dt>{"Value"}</dt>
                <dd class="value">{value}</dd>
            </dl>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::CounterAction::*;

    fn reduce_all(actions: &[model::CounterAction]) -> Rc<CounterState> {
        actions
            .iter()
            .fold(Rc::new(CounterState::default()), |state, &action| {
                state.reduce(action)
            })
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let state = reduce_all(&[Increment, Increment, Decrement]);

        assert_eq!(state.counter.count(), 1);
        assert_eq!(
            CounterStats::from(&state.counter),
            CounterStats {
                count: "1".to_string(),
                status: "Positive",
                value: "1".to_string(),
            }
        );
    }

    #[test]
    fn stats_show_absolute_value_for_negative_count() {
        let state = reduce_all(&[Decrement, Decrement]);

        let stats = CounterStats::from(&state.counter);

        assert_eq!(stats.count, "-2");
        assert_eq!(stats.status, "Negative");
        assert_eq!(stats.value, "2");
    }

    #[test]
    fn reset_action_clears_count() {
        let state = reduce_all(&[Decrement, Reset]);

        assert_eq!(*state, CounterState::default());
        assert_eq!(CounterStats::from(&state.counter).status, "Zero");
    }

    fn render<T>() -> String
    where
        T: yew::html::BaseComponent,
        T::Properties: Default,
    {
        futures::executor::block_on(yew::LocalServerRenderer::<T>::new().render())
    }

    #[function_component]
    fn WiredCounter() -> Html {
        html! {
            <CounterProvider>
                <CounterView />
            </CounterProvider>
        }
    }

    #[test]
    fn counter_view_renders_inside_provider() {
        let html = render::<WiredCounter>();

        assert!(html.contains("Counter App"));
        assert!(html.contains("Zero"));
    }

    #[test]
    #[should_panic(expected = "use_counter must be used within a CounterProvider")]
    fn counter_view_without_provider_panics() {
        render::<CounterView>();
    }
}
