use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div class="bg-black fixed bottom-0 w-full">
            <h1 class="flex items-center justify-center text-white p-2">
                {"Copyright @ 2024 "}
                <span class="text-[#FF7F47]">{"YCS TECHSOFT PVT.LTD."}</span>
                {" All Right Reserved."}
            </h1>
        </div>
    }
}
