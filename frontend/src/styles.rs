pub const SCREEN: &str = "min-h-screen bg-slate-950 text-white pb-24";
pub const SCREEN_INNER: &str = "max-w-2xl mx-auto";
pub const HEADER: &str = "sticky top-0 z-40 bg-slate-950/80 backdrop-blur-lg border-b border-white/10";
pub const HEADER_ROW: &str = "flex items-center justify-between px-4 py-3";
pub const HEADER_TITLE: &str = "font-bold text-lg";
pub const HEADER_BUTTON: &str = "p-2 text-white hover:bg-white/10 rounded-lg transition-colors duration-200";

pub const CURRENCY_ROW: &str = "flex items-center justify-center gap-4 px-4 pb-4";
pub const PILL: &str = "flex items-center gap-2 bg-slate-800/80 rounded-full px-4 py-2";
pub const PILL_VALUE: &str = "font-bold text-xl";
pub const PILL_ADD_BUTTON: &str = "h-8 w-8 rounded-full bg-blue-500 hover:bg-blue-600 flex items-center justify-center transition-colors";

pub const LIVE_STRIP: &str = "bg-slate-900/60 rounded-3xl p-4 flex items-center gap-3 overflow-x-auto";
pub const LIVE_LABEL: &str = "font-bold text-2xl whitespace-nowrap";
pub const LIVE_CARD: &str = "flex-shrink-0 w-16 h-16 bg-slate-800/60 rounded-2xl flex items-center justify-center text-3xl";

pub const CASE_CARD: &str = "bg-gradient-to-r rounded-3xl p-6 cursor-pointer hover:scale-[1.02] transition-all";
pub const CASE_ICON: &str = "w-20 h-20 bg-white/20 backdrop-blur-sm rounded-2xl flex items-center justify-center text-4xl";
pub const CASE_BADGE: &str = "inline-flex items-center gap-1 bg-white/20 text-white rounded-full px-3 py-1 font-semibold";

pub const NAV: &str = "fixed bottom-0 left-0 right-0 z-40 bg-slate-900 border-t border-white/10";
pub const NAV_INNER: &str = "max-w-2xl mx-auto flex items-center justify-around px-2 py-3";
pub const NAV_ITEM_ACTIVE: &str = "relative flex flex-col items-center gap-1 px-3 py-2 rounded-xl transition-colors text-blue-400";
pub const NAV_ITEM: &str = "relative flex flex-col items-center gap-1 px-3 py-2 rounded-xl transition-colors text-gray-400 hover:text-white";
pub const NAV_BADGE: &str = "absolute -top-2 -right-2 h-5 w-5 flex items-center justify-center rounded-full text-xs bg-red-500 text-white";

pub const MODAL_OVERLAY: &str = "fixed inset-0 z-50 bg-slate-950/95 backdrop-blur-sm overflow-y-auto";
pub const MODAL_PANEL: &str = "bg-gradient-to-b from-slate-800/50 to-slate-900/20 rounded-3xl p-6 mb-4";
pub const POOL_GRID: &str = "grid grid-cols-2 gap-3";
pub const POOL_CARD: &str = "bg-slate-800/80 rounded-2xl p-4 relative overflow-hidden hover:scale-[1.02] transition-all cursor-pointer";
pub const POOL_IMAGE: &str = "aspect-square bg-slate-700/30 rounded-xl mb-3 flex items-center justify-center text-6xl relative";
pub const POOL_LOCK: &str = "absolute inset-0 bg-black/60 backdrop-blur-sm rounded-xl flex items-center justify-center";
pub const POOL_BADGE: &str = "inline-flex items-center rounded-full bg-green-600 text-white px-3 py-1 font-medium text-sm";

pub const SPIN_SCREEN: &str = "fixed inset-0 z-50 bg-gradient-to-b from-blue-900 via-blue-800 to-blue-900 overflow-hidden";
pub const SPIN_POINTER: &str = "absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 w-1 h-32 bg-white/80 rounded-full z-10 pointer-events-none shadow-lg";
pub const SPIN_SIDE_BUTTON: &str = "flex-1 h-14 bg-blue-800/50 border border-white/20 text-white hover:bg-blue-700/50 text-lg font-semibold rounded-xl inline-flex items-center justify-center gap-2 transition-colors";
pub const PRIZE_CARD: &str = "bg-gradient-to-b from-blue-700/50 to-blue-800/50 backdrop-blur-sm rounded-3xl p-4 border border-white/10";
pub const PRIZE_IMAGE: &str = "aspect-square bg-blue-600/30 rounded-2xl flex items-center justify-center mb-3";
pub const PRIZE_VALUE: &str = "flex items-center justify-center gap-1 bg-blue-900/50 rounded-full px-3 py-2";
