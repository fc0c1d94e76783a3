//! Shared Tailwind class constants so pages render the same building blocks
//! alike.

pub struct Theme;

impl Theme {
    /// White panel used by forms, car cards and detail views.
    pub const CARD: &'static str = "bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg p-6";

    pub const PAGE_TITLE: &'static str = "text-2xl font-semibold text-gray-900 dark:text-white";

    pub const MUTED: &'static str = "text-sm text-gray-500 dark:text-gray-400";

    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

    /// Read-only input variant (e.g. the username on the profile form).
    pub const INPUT_READONLY: &'static str = "bg-gray-100 border border-gray-300 text-gray-500 text-sm rounded-lg block w-full p-2.5 cursor-not-allowed dark:bg-gray-800 dark:border-gray-600 dark:text-gray-400";

    pub const BUTTON_SECONDARY: &'static str = "inline-flex items-center px-4 py-2 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-blue-700 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700";

    pub const BUTTON_DANGER: &'static str = "inline-flex items-center px-4 py-2 text-sm font-medium text-white bg-red-600 rounded-lg hover:bg-red-700 disabled:opacity-50 disabled:cursor-not-allowed";

    /// Compact text button for table rows.
    pub const LINK_ACTION: &'static str = "text-sm font-medium text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300";

    pub const LINK_DANGER: &'static str = "text-sm font-medium text-red-600 hover:text-red-800 disabled:opacity-40 disabled:cursor-not-allowed";

    pub const TABLE_WRAPPER: &'static str = "overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg";

    pub const TABLE_HEAD: &'static str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    pub const TABLE_CELL: &'static str = "px-6 py-4 whitespace-nowrap text-sm text-gray-700 dark:text-gray-300";

    /// Small rounded status pill.
    pub const BADGE: &'static str = "inline-flex px-2 py-0.5 text-xs font-semibold rounded-full";
}
