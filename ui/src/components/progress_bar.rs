use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub percentage: f64,
    /// Fill color class, e.g. "bg-green-500".
    pub color: AttrValue,
}

#[function_component]
pub fn ProgressBar(props: &Props) -> Html {
    let width = props.percentage.clamp(0.0, 100.0);

    html! {
        <div class="relative w-full h-3 bg-neutral-200 dark:bg-neutral-700 rounded-full overflow-hidden">
            <div
                class={classes!(
                    "absolute", "top-0", "left-0", "h-full",
                    "transition-all", "duration-500",
                    props.color.to_string()
                )}
                style={format!("width: {width:.1}%")}
            />
        </div>
    }
}
